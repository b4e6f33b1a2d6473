//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod content_templater;
mod export_storage;
mod textbook_serializer;

pub use content_templater::{ContentTemplaterPort, ContentType};
pub use export_storage::{ExportStorageError, ExportStoragePort};
pub use textbook_serializer::{ExportFormat, SerializerError, TextbookSerializerPort};
