//! 类型定义模块

mod banner;
mod config;
mod edit_mode;
mod outcome;

pub use banner::{Banner, BannerKind, BANNER_ATTR};
pub use config::PageConfig;
pub use edit_mode::EditMode;
pub use outcome::ApiOutcome;

// Re-export API 库的公共类型
pub use registro_api::{Acknowledgement, FieldMap, RecordId, Registration, FIELD_NAMES};
