//! 应用主消息枚举

use super::NavigationMessage;

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
