//! DNS Changer Core Library
//!
//! Provides the platform-independent parts of the DNS Changer picker:
//! - Preset loading (`services::load_presets`)
//! - List navigation with eased scroll-follow (`navigation`)
//! - `resolv.conf` rewriting (`services::ResolverWriter`)
//!
//! Host interaction (gateway lookup, immutability attribute) is abstracted
//! through the `SystemCommands` trait so front ends and tests can inject
//! their own implementation.

pub mod config;
pub mod error;
pub mod navigation;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{AppConfig, JoystickConfig, LayoutMetrics, ScrollTuning};
pub use error::{CoreError, CoreResult};
pub use navigation::NavigationState;
pub use services::{load_presets, AppliedDns, ResolverWriter};
pub use traits::{ShellCommands, SystemCommands};
pub use types::DnsPreset;
