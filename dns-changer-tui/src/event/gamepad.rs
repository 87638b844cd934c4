//! Linux joystick 输入
//!
//! 读取 `/dev/input/js*` 的 8 字节事件：
//!
//! ```text
//! struct js_event {
//!     u32 time;     // 毫秒时间戳
//!     s16 value;    // 轴位置或按键状态
//!     u8  type;     // 0x01 按键, 0x02 轴, 0x80 初始状态标记
//!     u8  number;   // 轴/按键编号
//! };
//! ```
//!
//! 设备以非阻塞方式打开，主循环每帧把积压的事件全部取出。

use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::os::unix::fs::OpenOptionsExt;

use dns_changer_core::JoystickConfig;

use super::keymap::HatDirection;

const JS_EVENT_SIZE: usize = 8;
const JS_EVENT_BUTTON: u8 = 0x01;
const JS_EVENT_AXIS: u8 = 0x02;
const JS_EVENT_INIT: u8 = 0x80;

/// 轴偏移超过该值才算按下方向
const HAT_THRESHOLD: i16 = 16_384;

/// 解码后的原始事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsEvent {
    pub time_ms: u32,
    pub value: i16,
    pub kind: u8,
    pub number: u8,
}

/// 手柄产生的输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerInput {
    /// 按键按下，携带按键编号
    Button(u8),
    /// 方向键状态变化，携带 SDL 风格的 hat 位掩码
    Hat(u8),
}

/// 解码一条事件（小端序）
pub fn decode_event(buf: &[u8; JS_EVENT_SIZE]) -> JsEvent {
    JsEvent {
        time_ms: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        value: i16::from_le_bytes([buf[4], buf[5]]),
        kind: buf[6],
        number: buf[7],
    }
}

/// 方向键两根轴的当前状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HatState {
    x: i8,
    y: i8,
}

impl HatState {
    fn mask(self) -> u8 {
        let mut mask = 0;
        if self.y < 0 {
            mask |= HatDirection::Up as u8;
        }
        if self.x > 0 {
            mask |= HatDirection::Right as u8;
        }
        if self.y > 0 {
            mask |= HatDirection::Down as u8;
        }
        if self.x < 0 {
            mask |= HatDirection::Left as u8;
        }
        mask
    }
}

fn axis_direction(value: i16) -> i8 {
    if value <= -HAT_THRESHOLD {
        -1
    } else if value >= HAT_THRESHOLD {
        1
    } else {
        0
    }
}

/// 把原始事件翻译成输入
#[derive(Debug, Clone)]
pub struct EventTranslator {
    hat_axis_x: u8,
    hat_axis_y: u8,
    hat: HatState,
}

impl EventTranslator {
    pub fn new(hat_axis_x: u8, hat_axis_y: u8) -> Self {
        Self {
            hat_axis_x,
            hat_axis_y,
            hat: HatState::default(),
        }
    }

    pub fn translate(&mut self, event: JsEvent) -> Option<ControllerInput> {
        // 打开设备时内核会先发送一轮初始状态，忽略
        if event.kind & JS_EVENT_INIT != 0 {
            return None;
        }

        match event.kind {
            JS_EVENT_BUTTON if event.value != 0 => Some(ControllerInput::Button(event.number)),
            JS_EVENT_AXIS if event.number == self.hat_axis_x || event.number == self.hat_axis_y => {
                let previous = self.hat;
                let direction = axis_direction(event.value);
                if event.number == self.hat_axis_x {
                    self.hat.x = direction;
                } else {
                    self.hat.y = direction;
                }

                // 只在方向改变且不是回中时上报
                let mask = self.hat.mask();
                (self.hat != previous && mask != 0).then_some(ControllerInput::Hat(mask))
            }
            _ => None,
        }
    }
}

/// 已打开的手柄设备
pub struct Gamepad {
    device: File,
    translator: EventTranslator,
}

impl Gamepad {
    /// 按配置打开设备；未配置或打开失败时返回 `None`
    pub fn open(config: &JoystickConfig) -> Option<Self> {
        let path = config.device.as_ref()?;

        match OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
        {
            Ok(device) => {
                tracing::info!(device = %path.display(), "Controller opened");
                Some(Self {
                    device,
                    translator: EventTranslator::new(config.hat_axis_x, config.hat_axis_y),
                })
            }
            Err(e) => {
                tracing::info!(device = %path.display(), error = %e, "No controller, keyboard only");
                None
            }
        }
    }

    /// 取出所有积压的事件
    pub fn drain(&mut self) -> io::Result<Vec<ControllerInput>> {
        let mut inputs = Vec::new();
        let mut buf = [0u8; JS_EVENT_SIZE * 16];

        loop {
            let read = match self.device.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            for chunk in buf[..read].chunks_exact(JS_EVENT_SIZE) {
                let mut raw = [0u8; JS_EVENT_SIZE];
                raw.copy_from_slice(chunk);
                let event = decode_event(&raw);
                tracing::trace!(
                    time_ms = event.time_ms,
                    kind = event.kind,
                    number = event.number,
                    value = event.value,
                    "js_event"
                );
                if let Some(input) = self.translator.translate(event) {
                    inputs.push(input);
                }
            }
        }

        Ok(inputs)
    }
}
