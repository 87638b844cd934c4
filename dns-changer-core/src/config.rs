//! Runtime configuration
//!
//! Everything the picker needs from its environment is collected once at
//! startup into an [`AppConfig`] and then passed by reference to the loader,
//! the resolver writer and the front end.

use std::path::PathBuf;
use std::time::Duration;

/// 预设列表文件路径
pub const ENV_DNS_LIST_PATH: &str = "DNS_LIST_PATH";
/// resolv.conf 路径
pub const ENV_RESOLV_FILE_PATH: &str = "RESOLV_FILE_PATH";
/// 查询默认网关的 shell 命令
pub const ENV_GATEWAY_COMMAND: &str = "DNS_GATEWAY_COMMAND";
/// 切换不可变属性的命令
pub const ENV_CHATTR_COMMAND: &str = "DNS_CHATTR_COMMAND";
/// 手柄设备路径（空字符串表示禁用）
pub const ENV_JOYSTICK_DEVICE: &str = "DNS_JOYSTICK_DEVICE";
/// 方向键轴编号，格式 `x,y`
pub const ENV_JOYSTICK_HAT_AXES: &str = "DNS_JOYSTICK_HAT_AXES";
/// 界面语言
pub const ENV_LANGUAGE: &str = "DNS_CHANGER_LANG";
/// 日志目录
pub const ENV_LOG_DIR: &str = "DNS_CHANGER_LOG_DIR";

const DEFAULT_DNS_LIST_PATH: &str = "dns_list.json";
const DEFAULT_RESOLV_FILE_PATH: &str = "/etc/resolv.conf";
const DEFAULT_GATEWAY_COMMAND: &str = "ip r | awk '/default/ {print $3}'";
const DEFAULT_CHATTR_COMMAND: &str = "chattr";
const DEFAULT_JOYSTICK_DEVICE: &str = "/dev/input/js0";
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_HAT_AXES: (u8, u8) = (6, 7);

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON 预设列表
    pub dns_list_path: PathBuf,
    /// 被改写的 resolver 配置文件
    pub resolv_file_path: PathBuf,
    /// 输出默认网关地址的 shell 命令
    pub gateway_command: String,
    /// `chattr` 可执行文件
    pub immutable_attr_command: String,
    pub joystick: JoystickConfig,
    pub layout: LayoutMetrics,
    pub scroll: ScrollTuning,
    /// 成功提示显示多久后退出
    pub success_banner: Duration,
    /// BCP 47 语言代码
    pub language: String,
    /// `None` 时由前端决定默认目录
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// 从进程环境变量构建配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 使用自定义查找函数构建配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let joystick_device = match lookup(ENV_JOYSTICK_DEVICE) {
            // 显式设置为空字符串即禁用手柄
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(PathBuf::from(value)),
            None => Some(PathBuf::from(DEFAULT_JOYSTICK_DEVICE)),
        };

        let (hat_axis_x, hat_axis_y) = match non_empty(ENV_JOYSTICK_HAT_AXES) {
            Some(value) => parse_hat_axes(&value).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring {ENV_JOYSTICK_HAT_AXES}={value:?}, expected \"x,y\"; using {},{}",
                    DEFAULT_HAT_AXES.0,
                    DEFAULT_HAT_AXES.1
                );
                DEFAULT_HAT_AXES
            }),
            None => DEFAULT_HAT_AXES,
        };

        Self {
            dns_list_path: non_empty(ENV_DNS_LIST_PATH)
                .map_or_else(|| PathBuf::from(DEFAULT_DNS_LIST_PATH), PathBuf::from),
            resolv_file_path: non_empty(ENV_RESOLV_FILE_PATH)
                .map_or_else(|| PathBuf::from(DEFAULT_RESOLV_FILE_PATH), PathBuf::from),
            gateway_command: non_empty(ENV_GATEWAY_COMMAND)
                .unwrap_or_else(|| DEFAULT_GATEWAY_COMMAND.to_string()),
            immutable_attr_command: non_empty(ENV_CHATTR_COMMAND)
                .unwrap_or_else(|| DEFAULT_CHATTR_COMMAND.to_string()),
            joystick: JoystickConfig {
                device: joystick_device,
                hat_axis_x,
                hat_axis_y,
            },
            layout: LayoutMetrics::default(),
            scroll: ScrollTuning::default(),
            success_banner: Duration::from_secs(2),
            language: non_empty(ENV_LANGUAGE).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            log_dir: non_empty(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    /// 仅指定两个文件路径，其余全部取默认值
    pub fn for_paths(dns_list_path: impl Into<PathBuf>, resolv_file_path: impl Into<PathBuf>) -> Self {
        Self {
            dns_list_path: dns_list_path.into(),
            resolv_file_path: resolv_file_path.into(),
            ..Self::from_lookup(|_| None)
        }
    }
}

/// 解析 `x,y` 形式的轴编号，两轴不能相同
fn parse_hat_axes(value: &str) -> Option<(u8, u8)> {
    let (x, y) = value.split_once(',')?;
    let x = x.trim().parse().ok()?;
    let y = y.trim().parse().ok()?;
    (x != y).then_some((x, y))
}

/// 手柄配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoystickConfig {
    /// Linux joystick 设备（`/dev/input/js*`）
    pub device: Option<PathBuf>,
    /// 方向键横轴编号
    pub hat_axis_x: u8,
    /// 方向键纵轴编号
    pub hat_axis_y: u8,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            device: Some(PathBuf::from(DEFAULT_JOYSTICK_DEVICE)),
            hat_axis_x: DEFAULT_HAT_AXES.0,
            hat_axis_y: DEFAULT_HAT_AXES.1,
        }
    }
}

/// 列表布局尺寸（单位：终端行）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// 每一行预设占用的高度
    pub row_height: f64,
    /// 行与行之间的间距
    pub row_padding: f64,
    /// 自动滚动时选中行与视口边缘保持的距离
    pub scroll_margin: f64,
    /// 列表上方标题区域的高度
    pub header_height: u16,
}

impl LayoutMetrics {
    /// 一行加间距的步长
    pub fn row_stride(&self) -> f64 {
        self.row_height + self.row_padding
    }

    /// 视口过矮时收缩 margin，保证选中行仍能完整放下
    pub fn effective_margin(&self, viewport: f64) -> f64 {
        let room = ((viewport - self.row_height) / 2.0).max(0.0);
        self.scroll_margin.min(room)
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: 3.0,
            row_padding: 1.0,
            scroll_margin: 4.0,
            header_height: 4,
        }
    }
}

/// 滚动缓动参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTuning {
    /// 每帧向目标方向增加的速度
    pub acceleration: f64,
    /// 接近目标时每帧的速度衰减系数
    pub deceleration: f64,
    /// 速度绝对值上限
    pub max_speed: f64,
    /// 把速度单位换算为“每 1/60 秒多少行”
    pub frame_rate_normalizer: f64,
    /// 距离小于等于该值时开始减速
    pub settle_distance: f64,
    /// 速度低于该值时直接吸附到目标
    pub settle_velocity: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            acceleration: 0.3,
            deceleration: 0.8,
            max_speed: 2.0,
            frame_rate_normalizer: 60.0,
            settle_distance: 1.0,
            settle_velocity: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.dns_list_path, PathBuf::from("dns_list.json"));
        assert_eq!(config.resolv_file_path, PathBuf::from("/etc/resolv.conf"));
        assert_eq!(config.immutable_attr_command, "chattr");
        assert_eq!(config.joystick.device, Some(PathBuf::from("/dev/input/js0")));
        assert_eq!(config.language, "en-US");
        assert_eq!(config.success_banner, Duration::from_secs(2));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_paths_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DNS_LIST_PATH", "/mnt/SDCARD/dns.json"),
            ("RESOLV_FILE_PATH", "/tmp/resolv.conf"),
            ("DNS_CHANGER_LANG", "zh-CN"),
        ]));
        assert_eq!(config.dns_list_path, PathBuf::from("/mnt/SDCARD/dns.json"));
        assert_eq!(config.resolv_file_path, PathBuf::from("/tmp/resolv.conf"));
        assert_eq!(config.language, "zh-CN");
    }

    #[test]
    fn test_empty_joystick_device_disables_controller() {
        let config = AppConfig::from_lookup(lookup_from(&[("DNS_JOYSTICK_DEVICE", "")]));
        assert!(config.joystick.device.is_none());
    }

    #[test]
    fn test_hat_axes_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[("DNS_JOYSTICK_HAT_AXES", "0, 1")]));
        assert_eq!((config.joystick.hat_axis_x, config.joystick.hat_axis_y), (0, 1));
        assert_eq!(config.joystick.device, Some(PathBuf::from("/dev/input/js0")));
    }

    #[test]
    fn test_invalid_hat_axes_keep_default() {
        for value in ["6", "a,b", "300,1", "4,4", "1,2,3"] {
            let config = AppConfig::from_lookup(lookup_from(&[("DNS_JOYSTICK_HAT_AXES", value)]));
            assert_eq!(
                (config.joystick.hat_axis_x, config.joystick.hat_axis_y),
                (6, 7),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn test_blank_path_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("RESOLV_FILE_PATH", "  ")]));
        assert_eq!(config.resolv_file_path, PathBuf::from("/etc/resolv.conf"));
    }

    #[test]
    fn test_effective_margin_shrinks_in_small_viewport() {
        let layout = LayoutMetrics::default();
        assert!((layout.effective_margin(40.0) - 4.0).abs() < f64::EPSILON);
        // (7 - 3) / 2 = 2
        assert!((layout.effective_margin(7.0) - 2.0).abs() < f64::EPSILON);
        assert!(layout.effective_margin(2.0).abs() < f64::EPSILON);
    }
}
