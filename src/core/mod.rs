//! 核心抽象
//!
//! - Command: 语义命令（与具体按键无关）
//! - Key: 按键组合

pub mod command;
pub mod event;

pub use command::Command;
pub use event::Key;
