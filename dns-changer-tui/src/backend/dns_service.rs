//! DNS 应用服务

use dns_changer_core::{
    AppConfig, AppliedDns, CoreResult, DnsPreset, ResolverWriter, ShellCommands, SystemCommands,
};

/// 把预设写入系统的服务 trait
pub trait DnsApplier {
    /// 应用预设
    fn apply(&self, preset: &DnsPreset) -> CoreResult<AppliedDns>;
}

impl<C: SystemCommands> DnsApplier for ResolverWriter<C> {
    fn apply(&self, preset: &DnsPreset) -> CoreResult<AppliedDns> {
        ResolverWriter::apply(self, preset)
    }
}

/// 根据配置创建生产环境的写入器
pub fn create_applier(config: &AppConfig) -> Box<dyn DnsApplier> {
    let commands = ShellCommands::new(&config.gateway_command, &config.immutable_attr_command);
    Box::new(ResolverWriter::new(&config.resolv_file_path, commands))
}
