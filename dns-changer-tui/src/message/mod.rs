//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 键盘、手柄按键、手柄方向键三种输入都被翻译成同一套 Message，
//! Update 层只根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod navigation;
//!
//!         pub use app::AppMessage;
//!         pub use navigation::NavigationMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用（不应用任何修改）
//!             Navigation(NavigationMessage),      // 列表导航子消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod navigation;

pub use app::AppMessage;
pub use navigation::NavigationMessage;
