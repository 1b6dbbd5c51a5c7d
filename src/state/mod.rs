//! Application state: value types, modal overlays, and the `AppState` container.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    BookRecord, CategoryGroup, DisplayRow, Focus, Notice, QueryOutcome, QueryRequest, SortMode,
};
