//! Textbook Serializer Port - 导出序列化抽象

use thiserror::Error;

use crate::domain::textbook::Textbook;

/// 序列化错误
#[derive(Debug, Error)]
pub enum SerializerError {
    #[error("Failed to serialize textbook: {0}")]
    Failed(String),
}

/// 导出格式
///
/// 导出分派没有默认分支，未知格式直接报错
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// LaTeX 源文件（供外部排版生成 PDF）
    Pdf,
    Latex,
    Html,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pdf" => Some(ExportFormat::Pdf),
            "latex" => Some(ExportFormat::Latex),
            "html" => Some(ExportFormat::Html),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Latex => "latex",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    /// 输出文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf | ExportFormat::Latex => "tex",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textbook Serializer Port
///
/// 只读消费完整的教材聚合
pub trait TextbookSerializerPort: Send + Sync {
    fn serialize(&self, textbook: &Textbook) -> Result<String, SerializerError>;
}
