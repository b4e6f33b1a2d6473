//! Export Storage Port - 出站端口
//!
//! 定义导出文档写入的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 导出存储错误
#[derive(Debug, Error)]
pub enum ExportStorageError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Export Storage Port - 出站端口
#[async_trait]
pub trait ExportStoragePort: Send + Sync {
    /// 获取导出文件路径
    fn document_path(&self, file_name: &str) -> PathBuf;

    /// 写入导出文档，返回最终路径
    async fn write_document(
        &self,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, ExportStorageError>;
}
