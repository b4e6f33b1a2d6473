//! Textbook Context - Value Objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 教材唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextbookId(Uuid);

impl TextbookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TextbookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TextbookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 教材编写状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextbookStatus {
    #[default]
    Planning,
    Drafting,
    Review,
    Published,
}

impl TextbookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextbookStatus::Planning => "planning",
            TextbookStatus::Drafting => "drafting",
            TextbookStatus::Review => "review",
            TextbookStatus::Published => "published",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "planning" => Some(TextbookStatus::Planning),
            "drafting" => Some(TextbookStatus::Drafting),
            "review" => Some(TextbookStatus::Review),
            "published" => Some(TextbookStatus::Published),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextbookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 难度等级（不做额外校验）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 测评类型
///
/// 未识别的标签保留原文，落入 `Other`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssessmentType {
    Quiz,
    Test,
    SelfCheck,
    Other(String),
}

impl AssessmentType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "quiz" => Self::Quiz,
            "test" => Self::Test,
            "self-check" => Self::SelfCheck,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Quiz => "quiz",
            Self::Test => "test",
            Self::SelfCheck => "self-check",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for AssessmentType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for AssessmentType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<AssessmentType> for String {
    fn from(kind: AssessmentType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 教材元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub subject: String,
    pub level: String,
    pub authors: Vec<String>,
    pub edition: String,
    pub language: String,
    pub created_date: NaiveDate,
    pub status: TextbookStatus,
}

/// 目录条目
///
/// page_number 等于章节序号，只是分页模型的占位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub chapter_number: u32,
    pub chapter_title: String,
    pub page_number: usize,
}

/// 质量评分
///
/// 不变量:
/// - 每个分数都在 [0, 100] 内
/// - 每次质量检查整体覆盖四个分数
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityScores {
    pub accessibility: f64,
    pub pedagogical: f64,
    pub content_quality: f64,
    pub overall: f64,
}

impl QualityScores {
    /// 由三项分数计算总分（保留两位小数）
    pub fn from_categories(accessibility: f64, pedagogical: f64, content_quality: f64) -> Self {
        let overall = round2((accessibility + pedagogical + content_quality) / 3.0);
        Self {
            accessibility,
            pedagogical,
            content_quality,
            overall,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
