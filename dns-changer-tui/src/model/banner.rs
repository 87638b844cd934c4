//! 成功提示状态

use std::time::{Duration, Instant};

use dns_changer_core::AppliedDns;

/// 应用成功后显示的提示
#[derive(Debug, Clone)]
pub struct SuccessBanner {
    /// 写入的结果
    pub applied: AppliedDns,
    /// 显示开始时间
    pub shown_at: Instant,
}

impl SuccessBanner {
    pub fn new(applied: AppliedDns, shown_at: Instant) -> Self {
        Self { applied, shown_at }
    }

    /// 是否已经显示足够长的时间
    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= duration
    }
}
