//! 预设列表加载

use std::path::Path;

use crate::error::CoreError;
use crate::types::DnsPreset;

/// 加载预设列表
///
/// “系统默认”项总是先放入列表，再尝试读取文件：
/// - 文件不存在：只返回默认项
/// - 文件无法读取或不是合法的预设数组：记录错误，只返回默认项
pub fn load_presets(path: &Path) -> Vec<DnsPreset> {
    let mut presets = vec![DnsPreset::system_default()];

    if !path.exists() {
        log::info!("Preset file {} not found, only the system default is available", path.display());
        return presets;
    }

    let extra = std::fs::read_to_string(path)
        .map_err(|e| CoreError::io(path, e))
        .and_then(|content| {
            parse_presets(&content).map_err(|e| CoreError::InvalidPresetFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        });

    match extra {
        Ok(extra) => {
            log::info!("Loaded {} DNS presets from {}", extra.len(), path.display());
            presets.extend(extra);
        }
        Err(e) => {
            log::error!("Failed to load DNS presets: {e}");
        }
    }

    presets
}

/// 解析 JSON 预设数组（不含默认项）
pub fn parse_presets(content: &str) -> Result<Vec<DnsPreset>, serde_json::Error> {
    serde_json::from_str(content)
}
