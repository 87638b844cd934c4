//! Selection and scroll-follow state machine
//!
//! The selected row is kept inside the viewport by steering `scroll_offset`
//! toward a target with a small acceleration/deceleration model instead of
//! jumping. All distances share one unit (terminal rows in the TUI); the
//! velocity is expressed per 1/60 s frame and scaled by the real `dt`.

use crate::config::{LayoutMetrics, ScrollTuning};
use crate::types::DnsPreset;

/// 选中高亮动画从 0 走到 1 所需的秒数
pub const HIGHLIGHT_DURATION_SECS: f64 = 0.3;

/// 导航状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    /// 当前选中的索引
    pub selected_index: usize,
    /// 当前滚动偏移
    pub scroll_offset: f64,
    /// 最近一次计算出的目标偏移
    pub target_scroll: f64,
    /// 当前滚动速度（每帧）
    pub scroll_velocity: f64,
    /// 高亮颜色插值进度，范围 `[0, 1]`
    pub highlight_progress: f64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = self.selected_index.saturating_sub(1);
        self.highlight_progress = 0.0;
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(len - 1);
        self.highlight_progress = 0.0;
    }

    /// 获取当前选中的预设
    pub fn selected<'a>(&self, presets: &'a [DnsPreset]) -> Option<&'a DnsPreset> {
        presets.get(self.selected_index)
    }

    /// 每帧调用一次：推进高亮动画并让滚动偏移追随选中行
    pub fn tick(
        &mut self,
        dt: f64,
        viewport: f64,
        layout: &LayoutMetrics,
        tuning: &ScrollTuning,
        len: usize,
    ) {
        self.highlight_progress = (self.highlight_progress + dt / HIGHLIGHT_DURATION_SECS).min(1.0);
        self.update_scroll(dt, viewport, layout, tuning, len);
    }

    /// 滚动追随
    pub fn update_scroll(
        &mut self,
        dt: f64,
        viewport: f64,
        layout: &LayoutMetrics,
        tuning: &ScrollTuning,
        len: usize,
    ) {
        let max = max_scroll(len, viewport, layout);
        let margin = layout.effective_margin(viewport);

        self.target_scroll = if len == 0 {
            0.0
        } else {
            compute_target_scroll(self.selected_index, self.scroll_offset, viewport, margin, layout, max)
        };

        let distance = self.target_scroll - self.scroll_offset;

        if distance.abs() > tuning.settle_distance {
            // 向目标方向加速，速度绝对值不超过上限
            self.scroll_velocity = (self.scroll_velocity + tuning.acceleration * distance.signum())
                .clamp(-tuning.max_speed, tuning.max_speed);
        } else {
            self.scroll_velocity *= tuning.deceleration;
            if self.scroll_velocity.abs() < tuning.settle_velocity {
                // 直接吸附，避免无限逼近
                self.scroll_velocity = 0.0;
                self.scroll_offset = self.target_scroll;
            }
        }

        self.scroll_offset += self.scroll_velocity * dt * tuning.frame_rate_normalizer;
        self.scroll_offset = self.scroll_offset.clamp(0.0, max);
    }

    /// 是否已经停稳
    pub fn is_settled(&self) -> bool {
        self.scroll_velocity == 0.0
    }
}

/// 第 `index` 行的顶部位置
pub fn item_top(index: usize, layout: &LayoutMetrics) -> f64 {
    index as f64 * layout.row_stride()
}

/// 全部内容的总高度
pub fn content_height(len: usize, layout: &LayoutMetrics) -> f64 {
    len as f64 * layout.row_stride()
}

/// 最大滚动偏移，`max(0, 总高度 - 视口高度)`
pub fn max_scroll(len: usize, viewport: f64, layout: &LayoutMetrics) -> f64 {
    (content_height(len, layout) - viewport).max(0.0)
}

/// 计算让选中行保持可见的目标偏移
///
/// 选中行在可见区上方时向上滚，在下方时向下滚，否则保持 `offset` 不变。
/// 结果总是落在 `[0, max]` 内。
pub fn compute_target_scroll(
    selected: usize,
    offset: f64,
    viewport: f64,
    margin: f64,
    layout: &LayoutMetrics,
    max: f64,
) -> f64 {
    let item_y = item_top(selected, layout);

    if item_y < offset + margin {
        (item_y - margin).max(0.0).min(max)
    } else if item_y + layout.row_height > offset + viewport - margin {
        (item_y - viewport + layout.row_height + margin).clamp(0.0, max)
    } else {
        offset
    }
}
