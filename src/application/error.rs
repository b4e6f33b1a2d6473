//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{ExportStorageError, SerializerError};
use crate::domain::textbook::TextbookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 领域错误（缺少参数、章节越界等）
    #[error(transparent)]
    Domain(#[from] TextbookError),

    /// 不支持的导出格式
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建不支持格式错误
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// 是否为缺少参数错误
    pub fn missing_parameter(&self) -> Option<&'static str> {
        match self {
            Self::Domain(TextbookError::MissingParameter(field)) => Some(field),
            _ => None,
        }
    }

    /// 是否为章节越界错误
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::Domain(TextbookError::OutOfRange { .. }))
    }
}

impl From<SerializerError> for ApplicationError {
    fn from(err: SerializerError) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<ExportStorageError> for ApplicationError {
    fn from(err: ExportStorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}
