//! Catalog query engine and the search flow built on it.

pub mod collate;
pub mod engine;
pub mod filter;
pub mod group;
pub mod query;
pub mod search;
pub mod sort;

pub use engine::{CatalogEngine, LoadApplied, LoadState};
pub use filter::filter;
pub use group::group_by_category;
pub use query::query;
pub use search::{
    clear_search, cycle_sort_mode, handle_load_result, request_reload, submit_search,
};
pub use sort::sort_by_author;
