//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏：平时显示快捷键提示，应用成功或失败后显示结果
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let content = match (&app.banner, &app.apply_error) {
        (Some(banner), _) => Line::from(vec![
            Span::styled(format!(" ✔ {}", t().banner.applied), Styles::success()),
            Span::styled(
                format!("  {}", banner.applied.nameservers.join(", ")),
                Styles::hint_desc(),
            ),
        ]),
        (None, Some(error)) => Line::from(vec![
            Span::styled(format!(" ✘ {}", t().banner.failed), Styles::error()),
            Span::styled(format!("  {error}"), Styles::hint_desc()),
        ]),
        (None, None) => hints_line(),
    };

    let paragraph = Paragraph::new(content).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 快捷键提示
fn hints_line() -> Line<'static> {
    let texts = t();
    let hints = [
        ("↑↓", texts.hints.navigate),
        ("A/Enter", texts.hints.apply),
        ("B/Esc", texts.hints.cancel),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    Line::from(spans)
}
