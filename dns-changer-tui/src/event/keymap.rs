//! 快捷键与手柄按键映射
//!
//! 键盘、手柄按键、手柄方向键各有一张静态映射表，
//! 全部先翻译成 [`NavKey`]，再交给同一个处理函数。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
}

/// 归一化后的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
}

/// 手柄按键（Trimui Smart Pro 编号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ControllerButton {
    B = 0,
    A = 1,
}

impl ControllerButton {
    /// 从设备上报的按键编号解析
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::B),
            1 => Some(Self::A),
            _ => None,
        }
    }
}

/// 方向键（hat）取值，与 SDL 的 hat 位掩码一致
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HatDirection {
    Up = 1,
    Right = 2,
    Down = 4,
    Left = 8,
}

impl HatDirection {
    /// 解析 hat 值；斜向组合与居中返回 `None`
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Up),
            2 => Some(Self::Right),
            4 => Some(Self::Down),
            8 => Some(Self::Left),
            _ => None,
        }
    }
}

/// 键盘映射表
pub const KEYBOARD_TABLE: &[(KeyCode, NavKey)] = &[
    (KeyCode::Up, NavKey::Up),
    (KeyCode::Char('k'), NavKey::Up),
    (KeyCode::Down, NavKey::Down),
    (KeyCode::Char('j'), NavKey::Down),
    (KeyCode::Left, NavKey::Left),
    (KeyCode::Right, NavKey::Right),
    (KeyCode::Enter, NavKey::Enter),
    (KeyCode::Backspace, NavKey::Backspace),
    (KeyCode::Esc, NavKey::Backspace),
];

/// 手柄按键映射表
pub const BUTTON_TABLE: &[(ControllerButton, NavKey)] = &[
    (ControllerButton::A, NavKey::Enter),
    (ControllerButton::B, NavKey::Backspace),
];

/// 方向键映射表
pub const HAT_TABLE: &[(HatDirection, NavKey)] = &[
    (HatDirection::Up, NavKey::Up),
    (HatDirection::Down, NavKey::Down),
    (HatDirection::Left, NavKey::Left),
    (HatDirection::Right, NavKey::Right),
];

/// 在映射表中查找
pub fn lookup<K: PartialEq>(table: &[(K, NavKey)], key: &K) -> Option<NavKey> {
    table
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, nav)| *nav)
}
