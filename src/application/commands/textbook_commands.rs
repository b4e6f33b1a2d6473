//! Textbook Commands

use chrono::NaiveDate;
use serde::Deserialize;

use crate::application::ports::ContentType;
use crate::domain::textbook::{AssessmentType, Difficulty};

/// 初始化教材命令
///
/// title、subject、level、authors 为必填，缺失时按此顺序报告第一个
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitializeTextbook {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
    pub authors: Option<Vec<String>>,
    pub edition: Option<String>,
    pub language: Option<String>,
    pub created_date: Option<NaiveDate>,
    /// 初始编写状态，缺省为 planning
    pub status: Option<String>,
}

impl InitializeTextbook {
    /// 提供全部必填字段
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        authors: Vec<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            subject: Some(subject.into()),
            level: Some(level.into()),
            authors: Some(authors),
            ..Self::default()
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_created_date(mut self, created_date: NaiveDate) -> Self {
        self.created_date = Some(created_date);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// 添加章节命令
#[derive(Debug, Clone, Deserialize)]
pub struct AddChapter {
    pub chapter_number: u32,
    pub chapter_title: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl AddChapter {
    pub fn new(
        chapter_number: u32,
        chapter_title: impl Into<String>,
        learning_objectives: Vec<String>,
    ) -> Self {
        Self {
            chapter_number,
            chapter_title: chapter_title.into(),
            learning_objectives,
            duration: None,
            prerequisites: Vec::new(),
            key_points: Vec::new(),
        }
    }

    pub fn with_prerequisites(mut self, prerequisites: Vec<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

/// 添加小节命令
///
/// 除 chapter、section、title 外的字段都是模板参数
#[derive(Debug, Clone, Deserialize)]
pub struct AddSection {
    /// 1 起始的章节号
    #[serde(default)]
    pub chapter: usize,
    /// 小节标识，如 "1.1"
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub learning_objective: Option<String>,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub num_examples: Option<usize>,
    #[serde(default)]
    pub num_exercises: Option<usize>,
}

impl AddSection {
    pub fn new(chapter: usize, section: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            chapter,
            section: section.into(),
            title: title.into(),
            content_type: ContentType::default(),
            learning_objective: None,
            concepts: Vec::new(),
            examples: Vec::new(),
            exercises: Vec::new(),
            key_points: Vec::new(),
            difficulty: None,
            num_examples: None,
            num_exercises: None,
        }
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_learning_objective(mut self, objective: impl Into<String>) -> Self {
        self.learning_objective = Some(objective.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// 添加测评命令
#[derive(Debug, Clone, Deserialize)]
pub struct AddAssessment {
    #[serde(default)]
    pub chapter: usize,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    /// 生成的题目数量
    pub questions: usize,
    #[serde(default)]
    pub time_limit: Option<String>,
    /// 难度分布描述
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl AddAssessment {
    pub fn new(chapter: usize, assessment_type: impl Into<AssessmentType>, questions: usize) -> Self {
        Self {
            chapter,
            assessment_type: assessment_type.into(),
            questions,
            time_limit: None,
            difficulty: None,
        }
    }
}
