//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod banner;         // 成功提示
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub presets: Vec<DnsPreset>,        // 启动时加载，之后不再修改
//!             pub navigation: NavigationState,    // 选中项 + 滚动状态（来自 core）
//!             pub banner: Option<SuccessBanner>,  // 成功提示
//!             pub viewport_height: u16,           // 列表可见高度，每帧由主循环更新
//!             ...
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：App::new(presets, &config, applier)
//!         - 在 update/ 中修改：app.navigation.select_next(...)
//!         - 在 view/ 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、成功提示（SuccessBanner）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     应用成功后记录时间点，View 层显示提示；
//!     超过配置的时长后 App::tick 设置 should_quit，程序自动退出。
//!

mod app;
mod banner;

pub use app::App;
pub use banner::SuccessBanner;
