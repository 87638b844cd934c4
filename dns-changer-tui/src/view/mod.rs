//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧由主循环调用 view::render(&app, frame) 整屏重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 标题区、预设列表、状态栏
//!         mod layout;         // 主布局
//!         mod theme;          // 调色板与样式
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 布局
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌──────────────────────────────────────────────┐
//!     │                 DNS Changer                  │  header_height 行
//!     │     Select a DNS configuration to apply      │
//!     ├──────────────────────────────────────────────┤
//!     │  ┌────────────────────────────────────────┐ ║│
//!     │  │ Default DNS     System default DNS ... │ ║│  列表视口
//!     │  └────────────────────────────────────────┘ █│  (高度 = 总高 - 标题 - 状态栏)
//!     │  ┌────────────────────────────────────────┐ █│
//!     │  │ Cloudflare   Primary: 1.1.1.1 - ...    │ ║│
//!     ├──────────────────────────────────────────────┤
//!     │ ↑↓ Navigate │ A/Enter Apply │ B/Esc Exit     │  状态栏 / 成功提示
//!     └──────────────────────────────────────────────┘
//!
//!     列表视口高度必须与 Model 中的 viewport_height 一致，
//!     主循环每帧通过 list_viewport_height() 计算后写入 App。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 高亮动画
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     选中行背景色从 DARK_GRAY 过渡到 ACCENT_BLUE：
//!
//!         color = lerp(DARK_GRAY, ACCENT_BLUE, sin(progress * π/2))
//!
//!     progress 由 NavigationState::tick 推进，切换选中项时归零。
//!

mod components;
mod layout;
mod theme;

pub use layout::{list_viewport_height, render};

#[cfg(test)]
mod tests {
    use dns_changer_core::{AppliedDns, DnsPreset};
    use ratatui::{backend::TestBackend, Terminal};

    use super::theme::palette;
    use super::*;
    use crate::model::App;
    use crate::test_utils::{sample_presets, test_app, FakeApplier};

    const WIDTH: u16 = 70;
    const HEIGHT: u16 = 20;

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        app.viewport_height = list_viewport_height(HEIGHT, &app.layout);
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
    }

    fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..HEIGHT)
            .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_render_header_rows_and_hints() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);

        let lines = screen_lines(&draw(&mut app));
        let screen = lines.join("\n");

        assert!(screen.contains("DNS Changer"));
        assert!(screen.contains("Select a DNS configuration to apply"));
        assert!(screen.contains("Default DNS"));
        assert!(screen.contains("System default DNS configuration"));
        assert!(screen.contains("Primary: 1.1.1.1  -  Secondary: 1.0.0.1"));
        assert!(lines[usize::from(HEIGHT) - 1].contains("Navigate"));
    }

    #[test]
    fn test_selected_row_uses_highlight_colour() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);
        app.navigation.highlight_progress = 1.0;

        let terminal = draw(&mut app);
        let buffer = terminal.backend().buffer();

        // 标题区 4 行，第 0 项中间行在 y = 5，第 1 项在 y = 9
        assert_eq!(buffer[(2, 5)].bg, palette::ACCENT_BLUE);
        assert_eq!(buffer[(2, 9)].bg, palette::DARK_GRAY);
    }

    #[test]
    fn test_rows_scroll_with_offset() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);
        // 滚过第一项
        app.navigation.scroll_offset = 4.0;

        let screen = screen_lines(&draw(&mut app)).join("\n");

        assert!(!screen.contains("Default DNS"));
        assert!(screen.contains("Cloudflare"));
    }

    #[test]
    fn test_scrollbar_only_when_content_overflows() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);
        let last_column = |terminal: &Terminal<TestBackend>| {
            let buffer = terminal.backend().buffer();
            (4..HEIGHT - 1)
                .map(|y| buffer[(WIDTH - 1, y)].symbol().to_string())
                .collect::<String>()
        };

        // 4 项 * 4 行 = 16 > 15
        assert!(!last_column(&draw(&mut app)).trim().is_empty());

        let mut short = test_app(sample_presets()[..2].to_vec(), FakeApplier::new().0);
        assert!(last_column(&draw(&mut short)).trim().is_empty());
    }

    #[test]
    fn test_banner_replaces_hints() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);
        app.show_banner(AppliedDns {
            preset_name: "Quad9".to_string(),
            nameservers: vec!["9.9.9.9".to_string(), "149.112.112.112".to_string()],
        });

        let lines = screen_lines(&draw(&mut app));
        let status = &lines[usize::from(HEIGHT) - 1];

        assert!(status.contains("DNS configuration applied successfully!"));
        assert!(status.contains("9.9.9.9, 149.112.112.112"));
        assert!(!status.contains("Navigate"));
    }

    #[test]
    fn test_apply_error_replaces_hints() {
        let mut app = test_app(sample_presets(), FakeApplier::failing());
        app.show_apply_error("No default gateway found".to_string());

        let terminal = draw(&mut app);
        let lines = screen_lines(&terminal);
        let status = &lines[usize::from(HEIGHT) - 1];

        assert!(status.contains("Failed to apply DNS"));
        assert!(status.contains("No default gateway found"));
        assert!(!status.contains("Navigate"));
        assert_eq!(
            terminal.backend().buffer()[(1, HEIGHT - 1)].fg,
            palette::ERROR_RED
        );
    }

    #[test]
    fn test_empty_list_message() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(Vec::<DnsPreset>::new(), applier);

        let screen = screen_lines(&draw(&mut app)).join("\n");

        assert!(screen.contains("No DNS presets available"));
    }
}
