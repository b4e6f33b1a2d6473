//! Export Commands

/// 导出教材命令
///
/// format 为原始标签，由处理器解析
#[derive(Debug, Clone)]
pub struct ExportTextbook {
    pub format: String,
}

impl ExportTextbook {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}
