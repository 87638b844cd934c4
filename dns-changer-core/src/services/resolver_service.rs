//! resolv.conf 改写服务
//!
//! 改写流程（非原子、无备份）：
//! 1. 读取全部行
//! 2. 删除所有 `nameserver` 开头的行
//! 3. 追加新的 nameserver 行（系统默认项改为查询网关）
//! 4. 清除不可变属性（尽力而为）
//! 5. 覆盖写回
//! 6. 恢复不可变属性（尽力而为）

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};
use crate::traits::SystemCommands;
use crate::types::DnsPreset;

/// 被接管的指令关键字
pub const NAMESERVER_DIRECTIVE: &str = "nameserver";

/// 一次成功应用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDns {
    /// 被应用的预设名称
    pub preset_name: String,
    /// 按写入顺序排列的 nameserver
    pub nameservers: Vec<String>,
}

/// resolv.conf 写入器
pub struct ResolverWriter<C: SystemCommands> {
    path: PathBuf,
    commands: C,
}

impl<C: SystemCommands> ResolverWriter<C> {
    pub fn new(path: impl Into<PathBuf>, commands: C) -> Self {
        Self {
            path: path.into(),
            commands,
        }
    }

    /// 注入的系统命令实现
    pub fn commands(&self) -> &C {
        &self.commands
    }

    /// 将预设写入 resolver 配置文件
    pub fn apply(&self, preset: &DnsPreset) -> CoreResult<AppliedDns> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| CoreError::io(&self.path, e))?;

        // 先解析出要写入的地址，再动文件
        let nameservers = match preset.nameservers() {
            Some(servers) => servers.iter().map(ToString::to_string).collect(),
            None => vec![self.commands.default_gateway()?],
        };

        let rewritten = rewrite_nameservers(&content, &nameservers);

        // 属性切换失败时忽略：没有 chattr 或文件系统不支持时也应继续写入
        if let Err(e) = self.commands.set_immutable(&self.path, false) {
            log::warn!("Ignoring failure to clear immutable attribute: {e}");
        }

        std::fs::write(&self.path, rewritten).map_err(|e| CoreError::io(&self.path, e))?;

        // 同上，恢复失败只记录
        if let Err(e) = self.commands.set_immutable(&self.path, true) {
            log::warn!("Ignoring failure to restore immutable attribute: {e}");
        }

        log::info!(
            "Applied DNS preset '{}' to {}: {}",
            preset.name,
            self.path.display(),
            nameservers.join(", ")
        );

        Ok(AppliedDns {
            preset_name: preset.name.clone(),
            nameservers,
        })
    }
}

/// 删除旧的 nameserver 行并在末尾追加新的
///
/// 其余行保持原有顺序，每行都以 `\n` 结尾。
pub fn rewrite_nameservers<S: AsRef<str>>(content: &str, nameservers: &[S]) -> String {
    let mut output = String::with_capacity(content.len() + nameservers.len() * 24);

    for line in content.lines() {
        if line.starts_with(NAMESERVER_DIRECTIVE) {
            continue;
        }
        output.push_str(line);
        output.push('\n');
    }

    for server in nameservers {
        output.push_str(NAMESERVER_DIRECTIVE);
        output.push(' ');
        output.push_str(server.as_ref());
        output.push('\n');
    }

    output
}
