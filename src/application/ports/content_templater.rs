//! Content Templater Port - 内容模板抽象
//!
//! 定义小节正文生成的抽象接口，具体实现在 infrastructure/adapters 层

use serde::{Deserialize, Serialize};

use crate::application::commands::AddSection;

/// 小节内容类型
///
/// 未识别的标签落入 `General`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    #[default]
    Main,
    Example,
    Exercise,
    Assessment,
    General,
}

impl ContentType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "main" => ContentType::Main,
            "example" => ContentType::Example,
            "exercise" => ContentType::Exercise,
            "assessment" => ContentType::Assessment,
            _ => ContentType::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Main => "main",
            ContentType::Example => "example",
            ContentType::Exercise => "exercise",
            ContentType::Assessment => "assessment",
            ContentType::General => "default",
        }
    }
}

impl From<String> for ContentType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.as_str().to_string()
    }
}

/// Content Templater Port
///
/// 每次 add_section 调用一次，返回值原样作为小节正文
pub trait ContentTemplaterPort: Send + Sync {
    fn render(&self, content_type: ContentType, params: &AddSection) -> String;
}
