//! Storage Adapter - 文件系统导出存储

mod file_storage;

pub use file_storage::FileExportStorage;
