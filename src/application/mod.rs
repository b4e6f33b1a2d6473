//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ContentTemplater、TextbookSerializer、ExportStorage）
//! - commands: 命令及处理器
//! - creator: 教材构建引擎
//! - outline: 教材大纲加载与构建
//! - error: 应用层错误定义

pub mod commands;
pub mod creator;
pub mod error;
pub mod outline;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{export_file_name, ExportResponse, ExportTextbookHandler},
    AddAssessment, AddChapter, AddSection, ExportTextbook, InitializeTextbook,
};
pub use creator::TextbookCreator;
pub use error::ApplicationError;
pub use outline::{ChapterOutline, OutlineError, TextbookOutline};
pub use ports::{
    ContentTemplaterPort, ContentType, ExportFormat, ExportStorageError, ExportStoragePort,
    SerializerError, TextbookSerializerPort,
};
