//! Textbook Context - 教材限界上下文
//!
//! 职责:
//! - 教材聚合管理
//! - 章节、小节、测评与题目实体
//! - 目录与质量评分

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{ChapterBoundary, Textbook};
pub use entities::{Assessment, Chapter, Question, QuestionKind, Section};
pub use errors::TextbookError;
pub use value_objects::{
    AssessmentType, Difficulty, Metadata, QualityScores, TextbookId, TextbookStatus, TocEntry,
};
