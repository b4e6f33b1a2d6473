//! Quality Context - 质量检查
//!
//! 职责:
//! - 基础检查（元数据、章节结构）
//! - 综合检查（可访问性、教学设计、内容质量）
//! - 由检查结果推导评分并写回教材

mod checker;
mod report;
mod rules;

pub use checker::{QualityChecker, QualityPolicy};
pub use report::{CheckLevel, CheckStatus, Finding, QualityReport};
pub use rules::{
    basic_checks, AccessibilityRule, ContentQualityRule, PedagogyRule, QualityRule, ScoreCategory,
};
