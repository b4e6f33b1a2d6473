//! File Storage - 文件系统导出存储实现
//!
//! 实现 ExportStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ExportStorageError, ExportStoragePort};

/// 文件系统导出存储
pub struct FileExportStorage {
    /// 导出根目录
    base_dir: PathBuf,
}

impl FileExportStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, ExportStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| ExportStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取导出根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// 文件名必须是单个路径分量
fn validate_file_name(file_name: &str) -> Result<(), ExportStorageError> {
    let invalid = file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains('/')
        || file_name.contains('\\');
    if invalid {
        return Err(ExportStorageError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}

#[async_trait]
impl ExportStoragePort for FileExportStorage {
    fn document_path(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    async fn write_document(
        &self,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, ExportStorageError> {
        validate_file_name(file_name)?;
        let path = self.document_path(file_name);

        fs::write(&path, contents)
            .await
            .map_err(|e| ExportStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved export: file={}, size={} bytes",
            path.display(),
            contents.len()
        );

        Ok(path)
    }
}
