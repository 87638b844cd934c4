//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 负责将键盘与手柄输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod gamepad;        // Linux joystick 设备读取
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 按键映射表
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、两种输入源
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     · 终端键盘事件          crossterm::event::poll / read
//!     · 手柄（/dev/input/js0）非阻塞读取 8 字节 js_event
//!
//!     两种输入都先翻译成归一化按键 NavKey：
//!
//!         键盘                 手柄按键           手柄方向键        NavKey
//!         ────────────────     ──────────         ──────────        ─────────
//!         ↑ / k                                   Up (1)            Up
//!         ↓ / j                                   Down (4)          Down
//!         ←                                       Left (8)          Left
//!         →                                       Right (2)         Right
//!         Enter                A (1)                                Enter
//!         Backspace / Esc      B (0)                                Backspace
//!
//!     再由 handle_nav_key 统一翻译为 AppMessage：
//!
//!         Up          → NavigationMessage::SelectPrevious
//!         Down        → NavigationMessage::SelectNext
//!         Enter       → NavigationMessage::Confirm
//!         Backspace   → AppMessage::Quit
//!         Left/Right  → AppMessage::Noop
//!
//!     Ctrl+C 是唯一绕过映射表的按键，直接退出。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、手柄
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/event/gamepad.rs 中：
//!
//!         Gamepad::open(&config.joystick)     // 打不开就返回 None，只用键盘
//!         gamepad.drain()?                    // 每帧取出积压的输入
//!
//!     按键只上报按下；方向键由两根轴合成 SDL 风格的 hat 位掩码，
//!     仅在方向改变时上报一次，不做自动连发。
//!
//!
//! 在 src/app.rs 中，有：
//!     let msg = event::handle_event(event);
//!     update::update(app , msg)?;
//!

mod gamepad;
mod handler;
mod keymap;

pub use gamepad::{ControllerInput, Gamepad};
pub use handler::{handle_controller_input, handle_event, poll_event, wait_for_input};
