//! 宿主系统抽象 trait 定义

mod system_commands;

pub use system_commands::{ShellCommands, SystemCommands};
