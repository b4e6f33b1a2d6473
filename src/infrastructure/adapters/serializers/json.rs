//! JSON Serializer

use crate::application::ports::{SerializerError, TextbookSerializerPort};
use crate::domain::textbook::Textbook;

/// JSON 序列化器，输出整个聚合（含 id 与质量评分）
#[derive(Debug, Clone)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextbookSerializerPort for JsonSerializer {
    fn serialize(&self, textbook: &Textbook) -> Result<String, SerializerError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(textbook)
        } else {
            serde_json::to_string(textbook)
        };
        result.map_err(|e| SerializerError::Failed(e.to_string()))
    }
}
