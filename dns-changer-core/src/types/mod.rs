//! 类型定义模块

mod preset;

pub use preset::{DnsPreset, AUTO_SENTINEL, SYSTEM_DEFAULT_NAME};
