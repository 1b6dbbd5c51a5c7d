//! Modal dialog state for the UI.

use crate::state::types::BookRecord;

/// Overlay currently drawn above the result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Enlarged cover panel for one book.
    Cover {
        /// The book whose cover is shown.
        record: BookRecord,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Whether any overlay is open.
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
