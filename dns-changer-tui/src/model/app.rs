//! 应用主状态结构

use std::time::{Duration, Instant};

use dns_changer_core::{AppConfig, AppliedDns, DnsPreset, LayoutMetrics, NavigationState, ScrollTuning};

use super::SuccessBanner;
use crate::backend::DnsApplier;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// DNS 预设列表（首项总是系统默认）
    pub presets: Vec<DnsPreset>,

    /// 选中项与滚动状态
    pub navigation: NavigationState,

    /// 成功提示
    pub banner: Option<SuccessBanner>,

    /// 最近一次可恢复的应用失败（如找不到默认网关），显示在状态栏
    pub apply_error: Option<String>,

    /// 列表视口高度（终端行）
    pub viewport_height: u16,

    // === 配置 ===
    pub layout: LayoutMetrics,
    pub scroll: ScrollTuning,
    pub banner_duration: Duration,

    /// 写入 resolv.conf 的服务
    pub applier: Box<dyn DnsApplier>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(presets: Vec<DnsPreset>, config: &AppConfig, applier: Box<dyn DnsApplier>) -> Self {
        Self {
            should_quit: false,
            presets,
            navigation: NavigationState::new(),
            banner: None,
            apply_error: None,
            viewport_height: 0,
            layout: config.layout,
            scroll: config.scroll,
            banner_duration: config.success_banner,
            applier,
        }
    }

    /// 当前选中的预设
    pub fn selected_preset(&self) -> Option<&DnsPreset> {
        self.navigation.selected(&self.presets)
    }

    /// 记录一次可恢复的失败，留在选择界面
    pub fn show_apply_error(&mut self, message: String) {
        self.apply_error = Some(message);
    }

    /// 记录一次成功的应用
    pub fn show_banner(&mut self, applied: AppliedDns) {
        self.apply_error = None;
        self.banner = Some(SuccessBanner::new(applied, Instant::now()));
    }

    /// 每帧推进动画；提示显示完毕后退出
    pub fn tick(&mut self, dt: f64, now: Instant) {
        self.navigation.tick(
            dt,
            f64::from(self.viewport_height),
            &self.layout,
            &self.scroll,
            self.presets.len(),
        );

        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired(now, self.banner_duration))
        {
            self.should_quit = true;
        }
    }
}
