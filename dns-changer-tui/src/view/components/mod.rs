//! UI 组件

pub mod header;
pub mod preset_list;
pub mod statusbar;
