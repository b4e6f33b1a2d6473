//! 应用层 - 命令（写操作）

mod export_commands;
mod textbook_commands;

pub mod handlers;

pub use export_commands::*;
pub use textbook_commands::*;
