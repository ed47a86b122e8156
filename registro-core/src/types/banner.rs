//! Result banner shown above the registration form

use serde::Serialize;

/// Attribute marking the banner element, so the previous one can be found
pub const BANNER_ATTR: &str = "data-alert";

const BASE_CLASS: &str = "mb-4 rounded-lg p-4";

/// Styling class of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Failure,
}

/// A plain-text notice; front-ends must insert `text` as text, never as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Failure,
            text: text.into(),
        }
    }

    /// Full `class` attribute value of the banner element
    pub fn class_name(&self) -> String {
        let tone = match self.kind {
            BannerKind::Success => "border border-green-100 bg-green-50 text-green-800",
            BannerKind::Failure => "border border-red-100 bg-red-50 text-red-800",
        };
        format!("{BASE_CLASS} {tone}")
    }
}
