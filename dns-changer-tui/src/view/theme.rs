//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 调色板
pub mod palette {
    use ratatui::style::Color;

    pub const DARK_BG: Color = Color::Rgb(18, 18, 18);
    pub const DARKER_BG: Color = Color::Rgb(12, 12, 12);
    pub const ACCENT_BLUE: Color = Color::Rgb(0, 149, 255);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::Rgb(200, 200, 200);
    pub const DARK_GRAY: Color = Color::Rgb(40, 40, 40);
    pub const SUCCESS_GREEN: Color = Color::Rgb(76, 175, 80);
    pub const ERROR_RED: Color = Color::Rgb(244, 67, 54);
    pub const SCROLLBAR_BG: Color = Color::Rgb(30, 30, 30);
    pub const SCROLLBAR_THUMB: Color = Color::Rgb(60, 60, 60);
}

/// 两个 RGB 颜色之间线性插值，`t` 会被限制在 `[0, 1]`
///
/// 非 RGB 颜色无法插值，直接按 `t` 取较近的一端。
pub fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| {
                let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
                value.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// 选中高亮的背景色：`sin(progress * π/2)` 缓出
pub fn highlight_color(progress: f64) -> Color {
    let eased = (progress.clamp(0.0, 1.0) * std::f64::consts::FRAC_PI_2).sin();
    lerp_color(palette::DARK_GRAY, palette::ACCENT_BLUE, eased)
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 全屏背景
    pub fn background() -> Style {
        Style::default().bg(palette::DARK_BG)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(palette::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// 副标题样式
    pub fn subtitle() -> Style {
        Style::default().fg(palette::LIGHT_GRAY)
    }

    /// 未选中行
    pub fn row() -> Style {
        Style::default().bg(palette::DARK_GRAY).fg(palette::LIGHT_GRAY)
    }

    /// 选中行，背景随高亮进度变化
    pub fn selected_row(progress: f64) -> Style {
        Style::default()
            .bg(highlight_color(progress))
            .fg(palette::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(palette::DARKER_BG).fg(palette::LIGHT_GRAY)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(palette::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(palette::LIGHT_GRAY)
    }

    /// 成功提示样式
    pub fn success() -> Style {
        Style::default()
            .fg(palette::SUCCESS_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    /// 失败提示样式
    pub fn error() -> Style {
        Style::default()
            .fg(palette::ERROR_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// 滚动条轨道
    pub fn scrollbar_track() -> Style {
        Style::default().fg(palette::SCROLLBAR_BG)
    }

    /// 滚动条滑块
    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(palette::SCROLLBAR_THUMB)
    }
}
