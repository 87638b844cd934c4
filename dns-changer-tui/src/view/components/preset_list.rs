//! 预设列表组件
//!
//! 列表按终端行逐行裁剪：每个屏幕行换算成内容坐标
//! `scroll_offset + y`，再求出它落在哪一个预设、该预设的第几行。
//! 行间距部分留空，中间一行左侧显示名称，右侧显示地址。

use dns_changer_core::{navigation::max_scroll, DnsPreset};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{t, Translations};
use crate::model::App;
use crate::view::theme::Styles;

/// 列表左右留白
const H_MARGIN: u16 = 2;
/// 行内文字与行边缘的距离
const ROW_INSET: usize = 2;
/// 名称与地址之间至少保留的空格数
const MIN_GAP: usize = 2;

/// 渲染预设列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let texts = t();

    if app.presets.is_empty() {
        let empty = Paragraph::new(texts.list.empty)
            .style(Styles::subtitle())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let metrics = &app.layout;
    let max = max_scroll(app.presets.len(), f64::from(area.height), metrics);
    let show_scrollbar = max > 0.0;

    let scrollbar_width = u16::from(show_scrollbar);
    let rows_area = Rect {
        x: area.x.saturating_add(H_MARGIN),
        width: area
            .width
            .saturating_sub(H_MARGIN * 2 + scrollbar_width),
        ..area
    };

    let row_height = metrics.row_height.round().max(1.0) as i64;
    let stride = metrics.row_stride().round().max(1.0) as i64;
    let offset = app.navigation.scroll_offset.round().max(0.0) as i64;

    for line in 0..area.height {
        let content_y = offset + i64::from(line);
        let within = content_y % stride;
        if within >= row_height {
            continue;
        }

        let Ok(index) = usize::try_from(content_y / stride) else {
            continue;
        };
        let Some(preset) = app.presets.get(index) else {
            break;
        };

        let style = if index == app.navigation.selected_index {
            Styles::selected_row(app.navigation.highlight_progress)
        } else {
            Styles::row()
        };

        let text = if within == row_height / 2 {
            row_text(preset, rows_area.width, texts)
        } else {
            String::new()
        };

        let rect = Rect {
            y: area.y + line,
            height: 1,
            ..rows_area
        };
        frame.render_widget(Paragraph::new(text).style(style), rect);
    }

    if show_scrollbar {
        let mut state = ScrollbarState::new(max.ceil() as usize + 1)
            .position(offset as usize)
            .viewport_content_length(usize::from(area.height));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_style(Styles::scrollbar_track())
            .thumb_style(Styles::scrollbar_thumb());
        frame.render_stateful_widget(scrollbar, area, &mut state);
    }
}

/// 行右侧的说明文字
pub fn preset_details(preset: &DnsPreset, texts: &Translations) -> String {
    match preset.nameservers() {
        Some([primary, secondary]) => format!(
            "{}: {primary}  -  {}: {secondary}",
            texts.list.primary, texts.list.secondary
        ),
        None => texts.list.system_default.to_string(),
    }
}

/// 名称靠左、说明靠右，中间用空格填满
fn row_text(preset: &DnsPreset, width: u16, texts: &Translations) -> String {
    let details = preset_details(preset, texts);
    let inner = usize::from(width).saturating_sub(ROW_INSET * 2);
    let gap = inner
        .saturating_sub(preset.name.width() + details.width())
        .max(MIN_GAP);

    format!(
        "{inset}{name}{gap}{details}",
        inset = " ".repeat(ROW_INSET),
        name = preset.name,
        gap = " ".repeat(gap),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;

    #[test]
    fn test_details_for_regular_preset() {
        let preset = DnsPreset::new("Cloudflare", "1.1.1.1", "1.0.0.1");
        assert_eq!(
            preset_details(&preset, t()),
            "Primary: 1.1.1.1  -  Secondary: 1.0.0.1"
        );
    }

    #[test]
    fn test_details_for_system_default() {
        assert_eq!(
            preset_details(&DnsPreset::system_default(), t()),
            t().list.system_default
        );
    }

    #[test]
    fn test_row_text_right_aligns_details() {
        let preset = DnsPreset::new("Google", "8.8.8.8", "8.8.4.4");
        let text = row_text(&preset, 60, t());

        assert_eq!(text.width(), 60 - ROW_INSET);
        assert!(text.starts_with("  Google"));
        assert!(text.ends_with("Secondary: 8.8.4.4"));
    }

    #[test]
    fn test_row_text_keeps_gap_when_narrow() {
        let preset = DnsPreset::new("Google", "8.8.8.8", "8.8.4.4");
        let text = row_text(&preset, 10, t());
        assert!(text.contains("Google  Primary"));
    }
}
