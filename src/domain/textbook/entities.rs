//! Textbook Context - Entities

use serde::{Deserialize, Serialize};

use super::{AssessmentType, Difficulty};

/// 章节
///
/// 不变量:
/// - 只属于一个 Textbook
/// - chapter_number 与追加时的位置一致（由调用方保证顺序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    chapter_number: u32,
    chapter_title: String,
    learning_objectives: Vec<String>,
    sections: Vec<Section>,
    summary: String,
    assessment: Vec<Assessment>,
    key_points: Vec<String>,
    estimated_duration: String,
    prerequisites: Vec<String>,
}

impl Chapter {
    /// 创建章节，learning_objectives 需已规范化
    pub fn new(
        chapter_number: u32,
        chapter_title: impl Into<String>,
        learning_objectives: Vec<String>,
        estimated_duration: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            chapter_number,
            chapter_title: chapter_title.into(),
            learning_objectives,
            sections: Vec::new(),
            summary: String::new(),
            assessment: Vec::new(),
            key_points: Vec::new(),
            estimated_duration: estimated_duration.into(),
            prerequisites,
        }
    }

    pub fn with_key_points(mut self, key_points: Vec<String>) -> Self {
        self.key_points = key_points;
        self
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub(crate) fn push_assessment(&mut self, assessment: Assessment) {
        self.assessment.push(assessment);
    }

    pub(crate) fn set_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    // Getters
    pub fn chapter_number(&self) -> u32 {
        self.chapter_number
    }

    pub fn chapter_title(&self) -> &str {
        &self.chapter_title
    }

    pub fn learning_objectives(&self) -> &[String] {
        &self.learning_objectives
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessment
    }

    pub fn key_points(&self) -> &[String] {
        &self.key_points
    }

    pub fn estimated_duration(&self) -> &str {
        &self.estimated_duration
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }
}

/// 小节
///
/// section_id 由调用方提供，不校验唯一性
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section_id: String,
    pub title: String,
    /// 模板生成的正文，内容质量检查要求非空
    pub content: String,
    pub learning_objective: Option<String>,
    pub examples: Vec<String>,
    pub exercises: Vec<String>,
    pub key_points: Vec<String>,
    pub difficulty: Difficulty,
}

/// 测评
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub questions: Vec<Question>,
    pub time_limit: String,
    pub difficulty_distribution: String,
}

/// 题目
///
/// question_number 在测评内从 1 开始连续递增
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_number: usize,
    pub question_text: String,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// 题型（形态取决于测评类型）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "question_type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        correct_answer: String,
    },
    ShortAnswer {
        rubric: String,
    },
    TrueFalse {
        /// "true" 或 "false"
        correct_answer: String,
    },
    OpenEnded {
        guidelines: String,
    },
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::ShortAnswer { .. } => "short_answer",
            QuestionKind::TrueFalse { .. } => "true_false",
            QuestionKind::OpenEnded { .. } => "open_ended",
        }
    }

    /// 仅选择题带选项
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionKind::MultipleChoice { options, .. } => Some(options),
            _ => None,
        }
    }
}
