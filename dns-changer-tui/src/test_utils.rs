//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::RefCell;
use std::rc::Rc;

use dns_changer_core::{AppConfig, AppliedDns, CoreError, CoreResult, DnsPreset};

use crate::backend::DnsApplier;
use crate::model::App;

/// 已应用的预设名称记录
pub type ApplyLog = Rc<RefCell<Vec<String>>>;

// ===== FakeApplier =====

/// 失败方式
#[derive(Clone, Copy)]
enum Failure {
    /// 可恢复：找不到默认网关
    Gateway,
    /// 致命：resolv.conf 无法读写
    ResolverIo,
}

pub struct FakeApplier {
    log: ApplyLog,
    failure: Option<Failure>,
}

impl FakeApplier {
    pub fn new() -> (Box<dyn DnsApplier>, ApplyLog) {
        let log = ApplyLog::default();
        let applier = Self {
            log: Rc::clone(&log),
            failure: None,
        };
        (Box::new(applier), log)
    }

    /// 每次应用都报告找不到默认网关
    pub fn failing() -> Box<dyn DnsApplier> {
        Self::with_failure(Failure::Gateway)
    }

    /// 每次应用都报告 resolv.conf 写入失败
    pub fn failing_io() -> Box<dyn DnsApplier> {
        Self::with_failure(Failure::ResolverIo)
    }

    fn with_failure(failure: Failure) -> Box<dyn DnsApplier> {
        Box::new(Self {
            log: ApplyLog::default(),
            failure: Some(failure),
        })
    }
}

impl DnsApplier for FakeApplier {
    fn apply(&self, preset: &DnsPreset) -> CoreResult<AppliedDns> {
        match self.failure {
            Some(Failure::Gateway) => return Err(CoreError::GatewayNotFound),
            Some(Failure::ResolverIo) => {
                return Err(CoreError::io(
                    "/etc/resolv.conf",
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                ))
            }
            None => {}
        }
        self.log.borrow_mut().push(preset.name.clone());

        let nameservers = match preset.nameservers() {
            Some(servers) => servers.iter().map(ToString::to_string).collect(),
            None => vec!["192.168.1.1".to_string()],
        };
        Ok(AppliedDns {
            preset_name: preset.name.clone(),
            nameservers,
        })
    }
}

/// 默认项 + 三个常见公共 DNS
pub fn sample_presets() -> Vec<DnsPreset> {
    vec![
        DnsPreset::system_default(),
        DnsPreset::new("Cloudflare", "1.1.1.1", "1.0.0.1"),
        DnsPreset::new("Google", "8.8.8.8", "8.8.4.4"),
        DnsPreset::new("Quad9", "9.9.9.9", "149.112.112.112"),
    ]
}

/// 使用默认配置创建 App
pub fn test_app(presets: Vec<DnsPreset>, applier: Box<dyn DnsApplier>) -> App {
    let config = AppConfig::for_paths("dns_list.json", "resolv.conf");
    App::new(presets, &config, applier)
}
