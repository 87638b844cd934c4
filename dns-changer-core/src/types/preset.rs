//! DNS 预设

use serde::{Deserialize, Serialize};

/// 系统默认项的名称
pub const SYSTEM_DEFAULT_NAME: &str = "Default DNS";

/// 表示“使用系统默认”的占位地址
pub const AUTO_SENTINEL: &str = "auto";

/// 一条 DNS 预设（加载后不再修改）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsPreset {
    /// 显示名称
    pub name: String,
    /// 首选 DNS，或 `auto`
    pub primary: String,
    /// 备用 DNS，或 `auto`
    pub secondary: String,
}

impl DnsPreset {
    pub fn new(
        name: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// 始终位于列表首位的“系统默认”项
    pub fn system_default() -> Self {
        Self::new(SYSTEM_DEFAULT_NAME, AUTO_SENTINEL, AUTO_SENTINEL)
    }

    /// 是否为“系统默认”项（应用时改为查询默认网关）
    pub fn is_system_default(&self) -> bool {
        self.primary == AUTO_SENTINEL && self.secondary == AUTO_SENTINEL
    }

    /// 应用该预设后写入的 nameserver 列表；系统默认项返回 `None`
    pub fn nameservers(&self) -> Option<[&str; 2]> {
        if self.is_system_default() {
            None
        } else {
            Some([self.primary.as_str(), self.secondary.as_str()])
        }
    }
}
