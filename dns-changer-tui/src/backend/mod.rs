//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责真正修改系统 DNS。
//! 通过 dns-changer-core 库的 `ResolverWriter` 实现。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod dns_service;        // resolv.conf 写入服务
//!
//!
//!     DnsApplier trait 是 Update 层唯一依赖的接口：
//!
//!         pub trait DnsApplier {
//!             fn apply(&self, preset: &DnsPreset) -> CoreResult<AppliedDns>;
//!         }
//!
//!     生产环境使用 ResolverWriter<ShellCommands>，
//!     测试时可以换成不触碰文件系统的实现。
//!

mod dns_service;

pub use dns_service::{create_applier, DnsApplier};
