//! DNS Changer TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 键盘与手柄输入 (`event/`)
//! - **Backend**: 写入 resolv.conf (`backend/`)
//!
//!
//! main.rs
//! DNS Changer 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     dotenvy::dotenv()           // 读取可选的 .env
//!     AppConfig::from_env()       // 一次性收集全部配置
//!     init_logging()              // 日志写文件，不占用终端；失败不影响启动
//!     load_presets()              // “Default DNS” + dns_list.json
//!     Gamepad::open()             // 没有手柄时只用键盘
//!     init_terminal()             // 原始模式 + 备用屏幕
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 配置（环境变量，均可写在 .env 中）：
//!     DNS_LIST_PATH           预设列表，默认 dns_list.json
//!     RESOLV_FILE_PATH        被改写的文件，默认 /etc/resolv.conf
//!     DNS_GATEWAY_COMMAND     查询默认网关的 shell 命令
//!     DNS_CHATTR_COMMAND      切换不可变属性的命令，默认 chattr
//!     DNS_JOYSTICK_DEVICE     手柄设备，默认 /dev/input/js0，空字符串禁用
//!     DNS_JOYSTICK_HAT_AXES   方向键轴编号 x,y，默认 6,7
//!     DNS_CHANGER_LANG        界面语言 en-US / zh-CN
//!     DNS_CHANGER_LOG_DIR     日志目录
//!     RUST_LOG                日志级别，默认 info

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use dns_changer_core::{load_presets, AppConfig};

use event::Gamepad;
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取 .env（可选）
    let dotenv = dotenvy::dotenv();

    // 2. 收集配置
    let config = AppConfig::from_env();

    // 3. 初始化日志（失败时不写日志，照常运行）
    if let Some(log_file) = init_logging(&config) {
        tracing::info!(log_file = %log_file.display(), "DNS Changer starting");
    }
    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }

    // 4. 界面语言
    match Language::from_code(&config.language) {
        Some(lang) => set_language(lang),
        None => tracing::warn!(language = %config.language, "Unsupported language, using en-US"),
    }

    // 5. 加载预设并打开手柄
    let presets = load_presets(&config.dns_list_path);
    tracing::info!(count = presets.len(), "Presets loaded");
    let gamepad = Gamepad::open(&config.joystick);

    // 6. 创建应用实例
    let applier = backend::create_applier(&config);
    let mut app = model::App::new(presets, &config, applier);

    // 7. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, gamepad);

    // 8. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "DNS Changer exited with error");
    } else {
        tracing::info!("DNS Changer exited");
    }

    // 9. 返回结果
    result
}
