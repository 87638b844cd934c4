//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use dns_changer_core::{CoreError, CoreResult, SystemCommands};
use tempfile::TempDir;

/// 记录调用顺序的 fake 系统命令
pub struct FakeCommands {
    pub gateway: Option<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCommands {
    pub fn with_gateway(gateway: &str) -> Self {
        Self {
            gateway: Some(gateway.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SystemCommands for FakeCommands {
    fn default_gateway(&self) -> CoreResult<String> {
        self.calls.borrow_mut().push("gateway".to_string());
        self.gateway.clone().ok_or(CoreError::GatewayNotFound)
    }

    fn set_immutable(&self, _path: &Path, immutable: bool) -> CoreResult<()> {
        self.calls
            .borrow_mut()
            .push(if immutable { "+i" } else { "-i" }.to_string());
        Ok(())
    }
}

/// 在临时目录中准备预设文件和 resolv.conf
pub struct Sandbox {
    pub dir: TempDir,
    pub dns_list: PathBuf,
    pub resolv: PathBuf,
}

impl Sandbox {
    pub fn new(dns_list: Option<&str>, resolv: &str) -> Self {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let dns_list_path = dir.path().join("dns_list.json");
        let resolv_path = dir.path().join("resolv.conf");

        if let Some(content) = dns_list {
            std::fs::write(&dns_list_path, content).expect("写入预设文件失败");
        }
        std::fs::write(&resolv_path, resolv).expect("写入 resolv.conf 失败");

        Self {
            dir,
            dns_list: dns_list_path,
            resolv: resolv_path,
        }
    }

    pub fn read_resolv(&self) -> String {
        std::fs::read_to_string(&self.resolv).expect("读取 resolv.conf 失败")
    }
}

/// 统计 nameserver 行
pub fn nameserver_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.starts_with("nameserver"))
        .collect()
}
