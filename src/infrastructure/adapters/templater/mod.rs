//! Templater Adapter - 小节正文模板实现

mod markdown_templater;

pub use markdown_templater::{MarkdownTemplater, MarkdownTemplaterConfig};
