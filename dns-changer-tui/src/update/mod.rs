//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) -> Result<()> {...}
//!
//!
//!     在 Confirm 时会调用 Backend 层改写 resolv.conf。
//!     写入失败属于致命错误：通过 Result 一路返回到 main，
//!     先恢复终端，再以错误退出。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod navigation;

use anyhow::Result;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Result<()> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg)?;
        }

        AppMessage::Noop => {}
    }

    Ok(())
}
