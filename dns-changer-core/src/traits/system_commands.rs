//! 宿主系统命令抽象 Trait

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// 应用 DNS 时需要借助的外部命令
///
/// 平台实现:
/// - Linux 掌机: `ShellCommands`（`sh -c` + `chattr`）
/// - 测试: 记录调用的 fake 实现
pub trait SystemCommands {
    /// 查询当前默认路由的网关地址
    fn default_gateway(&self) -> CoreResult<String>;

    /// 设置或清除文件的不可变属性
    ///
    /// # Arguments
    /// * `path` - 目标文件
    /// * `immutable` - `true` 对应 `+i`，`false` 对应 `-i`
    fn set_immutable(&self, path: &Path, immutable: bool) -> CoreResult<()>;
}

/// 通过 shell 调用系统工具的实现
#[derive(Debug, Clone)]
pub struct ShellCommands {
    gateway_command: String,
    chattr: String,
}

impl ShellCommands {
    pub fn new(gateway_command: impl Into<String>, chattr: impl Into<String>) -> Self {
        Self {
            gateway_command: gateway_command.into(),
            chattr: chattr.into(),
        }
    }
}

impl SystemCommands for ShellCommands {
    fn default_gateway(&self) -> CoreResult<String> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.gateway_command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CoreError::CommandFailed {
                command: self.gateway_command.clone(),
                message: e.to_string(),
            })?;

        // 存在多条默认路由时只取第一条
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(ToString::to_string)
            .ok_or(CoreError::GatewayNotFound)
    }

    fn set_immutable(&self, path: &Path, immutable: bool) -> CoreResult<()> {
        let flag = if immutable { "+i" } else { "-i" };
        let command = format!("{} {flag} {}", self.chattr, path.display());

        // 输出全部捕获，子进程不能写到界面所在的终端
        let output = Command::new(&self.chattr)
            .arg(flag)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CoreError::CommandFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => output.status.to_string(),
            text => format!("{}: {text}", output.status),
        };
        Err(CoreError::CommandFailed { command, message })
    }
}
