//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 被初始化为以下状态：
//!
//! App {
//!
//!     should_quit: false,                             // 决定应用是否应该退出
//!     presets: [Default DNS, ...],                    // 启动时加载一次
//!     navigation: NavigationState {
//!         selected_index: 0,                          // 默认选中 “Default DNS”
//!         scroll_offset: 0.0,
//!         ...
//!     },
//!     banner: None,                                   // 成功提示
//!
//! }
//!
//!
//! 主循环以约 60 FPS 运行，每一帧：
//! loop {
//!
//!     while let Some(event) = poll_event(0) {         // 1. 取出全部积压的终端事件
//!         update(&mut app , handle_event(event))?
//!     }
//!     for input in gamepad.drain()? {                 // 2. 取出全部手柄事件
//!         update(&mut app , handle_controller_input(input))?
//!     }
//!     if app.should_quit { break }
//!
//!     app.tick(dt , now)                              // 3. 推进滚动与高亮动画
//!     terminal.draw(|f| view::render(&app , f))       // 4. 渲染 UI
//!     if app.should_quit { break }                    // 提示显示完毕后退出
//!
//!     wait_for_input(剩余帧时间)                      // 5. 等待下一帧或新的按键
//! }

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event::{self, Gamepad};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 每帧的时间预算（约 60 FPS）
const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, mut gamepad: Option<Gamepad>) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        // 1. 处理全部积压的终端事件
        while let Some(event) = event::poll_event(Duration::ZERO)? {
            let msg = event::handle_event(event);
            update::update(app, msg)?;
        }

        // 2. 处理手柄事件；设备出错（例如被拔出）后只用键盘
        if let Some(pad) = gamepad.as_mut() {
            match pad.drain() {
                Ok(inputs) => {
                    for input in inputs {
                        update::update(app, event::handle_controller_input(input))?;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Controller read failed, disabling controller");
                    gamepad = None;
                }
            }
        }

        if app.should_quit {
            break;
        }

        // 3. 推进动画
        let dt = frame_start.duration_since(last_frame).as_secs_f64();
        last_frame = frame_start;

        let size = terminal.size()?;
        app.viewport_height = view::list_viewport_height(size.height, &app.layout);
        app.tick(dt, frame_start);

        // 4. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 成功提示显示完毕
        if app.should_quit {
            break;
        }

        // 5. 等待剩余帧时间，有按键时提前醒来
        let remaining = FRAME_BUDGET.saturating_sub(frame_start.elapsed());
        if !remaining.is_zero() {
            event::wait_for_input(remaining)?;
        }
    }

    Ok(())
}
