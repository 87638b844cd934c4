//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志输出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 写入日志文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub fn init_terminal() -> Result<Term> {
//!         enable_raw_mode()?;                                 // 1. 启用原始模式
//!         execute!(stdout, EnterAlternateScreen, Hide)?;      // 2. 进入备用屏幕，隐藏光标
//!         Terminal::new(CrosstermBackend::new(stdout))        // 3. 创建终端对象
//!     }
//!
//!     · Raw Mode：无需按 Enter，每个按键立即生效，不回显
//!     · Alternate Screen：退出后恢复原来的屏幕内容
//!
//!     restore_terminal() 必须在 app::run 之后无条件执行，
//!     即使 run 返回错误也要先恢复终端，再把错误交给 main 返回。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端被界面占满，日志不能写 stdout/stderr。
//!
//!         init_logging(&config)       // -> Option<PathBuf>
//!             - 目录：DNS_CHANGER_LOG_DIR > ~/.local/share/dns-changer
//!             - 目录不可写时退回 /tmp/dns-changer，仍失败则不写日志
//!             - 文件：dns-changer.log（不轮转，同步写入）
//!             - 级别：RUST_LOG，默认 info
//!
//!     core 中的 log::info! 等宏通过 tracing-log 桥接到同一个文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
