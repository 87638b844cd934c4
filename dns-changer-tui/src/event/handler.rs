//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use super::gamepad::ControllerInput;
use super::keymap::{
    lookup, ControllerButton, DefaultKeymap, HatDirection, NavKey, BUTTON_TABLE, HAT_TABLE,
    KEYBOARD_TABLE,
};
use crate::message::{AppMessage, NavigationMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 阻塞等待输入，最长 `timeout`；不读取事件
pub fn wait_for_input(timeout: Duration) -> Result<bool> {
    Ok(event::poll(timeout)?)
}

/// 处理终端事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        // 尺寸变化由下一帧重新计算视口
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    lookup(KEYBOARD_TABLE, &key.code).map_or(AppMessage::Noop, handle_nav_key)
}

/// 处理手柄输入
pub fn handle_controller_input(input: ControllerInput) -> AppMessage {
    let key = match input {
        ControllerInput::Button(code) => {
            ControllerButton::from_code(code).and_then(|button| lookup(BUTTON_TABLE, &button))
        }
        ControllerInput::Hat(code) => {
            HatDirection::from_code(code).and_then(|hat| lookup(HAT_TABLE, &hat))
        }
    };

    key.map_or(AppMessage::Noop, handle_nav_key)
}

/// 归一化按键到消息的统一入口
pub fn handle_nav_key(key: NavKey) -> AppMessage {
    match key {
        NavKey::Up => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        NavKey::Down => AppMessage::Navigation(NavigationMessage::SelectNext),
        NavKey::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        NavKey::Backspace => AppMessage::Quit,
        // 单列列表，左右无动作
        NavKey::Left | NavKey::Right => AppMessage::Noop,
    }
}
