//! 主布局渲染

use dns_changer_core::LayoutMetrics;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::Styles;

/// 状态栏高度
const STATUSBAR_HEIGHT: u16 = 1;

/// 屏幕分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// 三层布局：标题区 + 列表 + 状态栏
    pub fn split(area: Rect, metrics: &LayoutMetrics) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(metrics.header_height), // 标题区
                Constraint::Min(0),                        // 列表
                Constraint::Length(STATUSBAR_HEIGHT),      // 状态栏
            ])
            .split(area);

        Self {
            header: chunks[0],
            list: chunks[1],
            status: chunks[2],
        }
    }
}

/// 给定终端总高度时列表可用的行数
pub fn list_viewport_height(total: u16, metrics: &LayoutMetrics) -> u16 {
    total.saturating_sub(metrics.header_height + STATUSBAR_HEIGHT)
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Styles::background()), area);

    let layout = AppLayout::split(area, &app.layout);

    components::header::render(frame, layout.header);
    components::preset_list::render(app, frame, layout.list);
    components::statusbar::render(app, frame, layout.status);
}
