//! Textbook Outline - 教材大纲
//!
//! 从 TOML / JSON 大纲文件描述一本教材，并通过 TextbookCreator 构建

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::application::commands::{AddAssessment, AddChapter, AddSection, InitializeTextbook};
use crate::application::creator::TextbookCreator;
use crate::application::error::ApplicationError;
use crate::domain::textbook::Textbook;

/// 大纲解析错误
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("Failed to parse TOML outline: {0}")]
    Toml(String),

    #[error("Failed to parse JSON outline: {0}")]
    Json(String),

    #[error("Unsupported outline file extension: {0}")]
    UnsupportedExtension(String),
}

/// 教材大纲
#[derive(Debug, Clone, Deserialize)]
pub struct TextbookOutline {
    pub textbook: InitializeTextbook,
    #[serde(default)]
    pub chapters: Vec<ChapterOutline>,
}

/// 章节大纲
///
/// 小节与测评不需要填写 chapter，按章节位置自动寻址
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterOutline {
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
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub sections: Vec<AddSection>,
    #[serde(default)]
    pub assessments: Vec<AddAssessment>,
}

impl ChapterOutline {
    fn to_command(&self) -> AddChapter {
        AddChapter {
            chapter_number: self.chapter_number,
            chapter_title: self.chapter_title.clone(),
            learning_objectives: self.learning_objectives.clone(),
            duration: self.duration.clone(),
            prerequisites: self.prerequisites.clone(),
            key_points: self.key_points.clone(),
        }
    }
}

impl TextbookOutline {
    pub fn from_toml_str(contents: &str) -> Result<Self, OutlineError> {
        toml::from_str(contents).map_err(|e| OutlineError::Toml(e.to_string()))
    }

    pub fn from_json_str(contents: &str) -> Result<Self, OutlineError> {
        serde_json::from_str(contents).map_err(|e| OutlineError::Json(e.to_string()))
    }

    /// 按文件扩展名选择解析格式
    pub fn parse_for_path(path: &Path, contents: &str) -> Result<Self, OutlineError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml_str(contents),
            "json" => Self::from_json_str(contents),
            other => Err(OutlineError::UnsupportedExtension(other.to_string())),
        }
    }

    /// 构建教材
    ///
    /// 先追加全部章节，再按章节位置追加小节、测评和小结
    pub fn build(self, creator: &TextbookCreator) -> Result<Textbook, ApplicationError> {
        let mut textbook = creator.initialize_textbook(self.textbook)?;

        for chapter in &self.chapters {
            creator.add_chapter(&mut textbook, chapter.to_command());
        }

        for (index, chapter) in self.chapters.into_iter().enumerate() {
            let position = index + 1;

            for mut section in chapter.sections {
                section.chapter = position;
                creator.add_section(&mut textbook, section)?;
            }

            for mut assessment in chapter.assessments {
                assessment.chapter = position;
                creator.add_assessment(&mut textbook, assessment)?;
            }

            if let Some(summary) = chapter.summary {
                creator.set_chapter_summary(&mut textbook, position, summary)?;
            }
        }

        Ok(textbook)
    }
}
