//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::RefCell;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::traits::SystemCommands;

// ===== RecordingCommands =====

/// 记录所有调用的 `SystemCommands` 实现
pub struct RecordingCommands {
    gateway: Option<String>,
    /// 为 true 时 `set_immutable` 总是失败
    fail_chattr: bool,
    calls: RefCell<Vec<String>>,
}

impl RecordingCommands {
    pub fn new(gateway: &str) -> Self {
        Self {
            gateway: Some(gateway.to_string()),
            fail_chattr: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without_gateway() -> Self {
        Self {
            gateway: None,
            ..Self::new("")
        }
    }

    pub fn failing_chattr(gateway: &str) -> Self {
        Self {
            fail_chattr: true,
            ..Self::new(gateway)
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SystemCommands for RecordingCommands {
    fn default_gateway(&self) -> CoreResult<String> {
        self.calls.borrow_mut().push("gateway".to_string());
        self.gateway.clone().ok_or(CoreError::GatewayNotFound)
    }

    fn set_immutable(&self, _path: &Path, immutable: bool) -> CoreResult<()> {
        let flag = if immutable { "+i" } else { "-i" };
        self.calls.borrow_mut().push(format!("chattr {flag}"));
        if self.fail_chattr {
            return Err(CoreError::CommandFailed {
                command: format!("chattr {flag}"),
                message: "operation not supported".to_string(),
            });
        }
        Ok(())
    }
}
