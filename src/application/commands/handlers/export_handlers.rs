//! Export Command Handlers

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::ExportTextbook;
use crate::application::error::ApplicationError;
use crate::application::ports::{ExportFormat, ExportStoragePort, TextbookSerializerPort};
use crate::domain::textbook::Textbook;

/// 导出响应
#[derive(Debug, Clone)]
pub struct ExportResponse {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: usize,
    pub message: String,
}

/// ExportTextbook Handler
///
/// 按格式分派到已注册的序列化器，再通过存储端口写出
pub struct ExportTextbookHandler {
    storage: Arc<dyn ExportStoragePort>,
    serializers: HashMap<ExportFormat, Arc<dyn TextbookSerializerPort>>,
}

impl ExportTextbookHandler {
    pub fn new(storage: Arc<dyn ExportStoragePort>) -> Self {
        Self {
            storage,
            serializers: HashMap::new(),
        }
    }

    /// 注册格式对应的序列化器
    pub fn register(mut self, format: ExportFormat, serializer: Arc<dyn TextbookSerializerPort>) -> Self {
        self.serializers.insert(format, serializer);
        self
    }

    pub async fn handle(
        &self,
        textbook: &Textbook,
        command: ExportTextbook,
    ) -> Result<ExportResponse, ApplicationError> {
        let format = ExportFormat::from_str(&command.format)
            .ok_or_else(|| ApplicationError::unsupported_format(&command.format))?;
        let serializer = self
            .serializers
            .get(&format)
            .ok_or_else(|| ApplicationError::unsupported_format(&command.format))?;

        let document = serializer.serialize(textbook)?;
        let file_name = export_file_name(textbook.title(), format);
        let path = self.storage.write_document(&file_name, &document).await?;

        let message = match format {
            ExportFormat::Pdf => format!("Textbook exported to LaTeX file: {}", path.display()),
            other => format!("Textbook exported to {} file: {}", other, path.display()),
        };

        tracing::info!(
            textbook_id = %textbook.id(),
            format = %format,
            path = %path.display(),
            bytes = document.len(),
            "Textbook exported"
        );

        Ok(ExportResponse {
            format,
            path,
            bytes: document.len(),
            message,
        })
    }
}

/// 由标题生成导出文件名
///
/// 空白与路径分隔符替换为下划线；pdf 导出为 `<标题>_export.tex`
pub fn export_file_name(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    let stem = if stem.is_empty() { "textbook".to_string() } else { stem };

    match format {
        ExportFormat::Pdf => format!("{}_export.{}", stem, format.extension()),
        _ => format!("{}.{}", stem, format.extension()),
    }
}
