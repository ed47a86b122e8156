//! 工具函数模块

pub mod html;

pub use html::escape_html;
