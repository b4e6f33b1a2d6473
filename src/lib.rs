//! Textbook Forge - 教材构建与质量检查
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Textbook Context: 教材、章节、小节、测评
//! - Quality Context: 分级质量检查与评分
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ContentTemplater, TextbookSerializer, ExportStorage）
//! - Creator: 教材构建引擎
//! - Commands: 命令及导出处理器
//! - Outline: TOML / JSON 大纲
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Markdown 模板、LaTeX / HTML / JSON 序列化、文件导出存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
