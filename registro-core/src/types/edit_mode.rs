//! 编辑模式状态

use registro_api::RecordId;

/// Which record, if any, the form is currently editing.
///
/// ```text
///  Idle ──edit(R)──▶ Editing(R) ──edit(S)──▶ Editing(S)
///   ▲                    │
///   └── saved ───────────┘
/// ```
///
/// There is no cancel transition; only a successful update returns to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    /// No record selected; submitting creates a new record
    #[default]
    Idle,
    /// Submitting updates the record with this id
    Editing(RecordId),
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Id of the record being edited
    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            Self::Editing(id) => Some(id),
            Self::Idle => None,
        }
    }
}
