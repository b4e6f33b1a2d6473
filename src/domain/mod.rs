//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Textbook Context: 教材文档模型
//! - Quality Context: 质量检查与评分

pub mod quality;
pub mod textbook;

// 共享的纯函数组件
mod objectives;
mod question_generator;

pub use objectives::{normalize_objective, validate_objectives, ACTION_VERBS};
pub use question_generator::{generate_question, generate_questions};
