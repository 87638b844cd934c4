//! 业务逻辑服务层

mod preset_service;
mod resolver_service;

pub use preset_service::{load_presets, parse_presets};
pub use resolver_service::{rewrite_nameservers, AppliedDns, ResolverWriter, NAMESERVER_DIRECTIVE};
