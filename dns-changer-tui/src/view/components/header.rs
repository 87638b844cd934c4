//! 顶部标题区组件

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染标题与副标题，居中显示
pub fn render(frame: &mut Frame, area: Rect) {
    let texts = t();

    let mut lines = Vec::with_capacity(usize::from(area.height));
    // 高度足够时在标题上方留一行空白
    if area.height > 2 {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(texts.header.title, Styles::title())));
    lines.push(Line::from(Span::styled(texts.header.subtitle, Styles::subtitle())));

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}
