//! Owner of the working set and its load lifecycle.

use crate::catalog::LoadError;
use crate::state::{BookRecord, QueryOutcome, QueryRequest};

/// Load lifecycle of the working set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight; queries must wait.
    Loading,
    /// The last load succeeded.
    Ready,
    /// The last load failed with this message; any earlier set is still in use.
    Failed(String),
}

/// What happened when a load completion was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadApplied {
    /// The working set was replaced by this many records.
    Replaced(usize),
    /// The load failed; the working set is unchanged.
    Failed(String),
    /// A newer load was started after this one; the completion was ignored.
    Stale,
}

/// Query engine instance holding the working set.
///
/// The set is replaced as a whole by each successful load and is never
/// partially updated, so a failed or superseded load cannot leave a mixed
/// state visible to [`CatalogEngine::query`].
#[derive(Debug, Default)]
pub struct CatalogEngine {
    records: Vec<BookRecord>,
    state: LoadState,
    has_loaded: bool,
    next_load_id: u64,
    latest_load_id: u64,
}

impl CatalogEngine {
    /// Engine whose working set is already loaded with `records`.
    pub fn from_records(records: Vec<BookRecord>) -> Self {
        Self {
            records,
            state: LoadState::Ready,
            has_loaded: true,
            ..Self::default()
        }
    }

    /// The current working set.
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Current load state.
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether a load is in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// What: Mark a new load as started and allocate its id.
    ///
    /// Output:
    /// - Id to pass back to [`CatalogEngine::apply_load`]; only the most recent id is honored.
    pub fn begin_load(&mut self) -> u64 {
        self.next_load_id += 1;
        self.latest_load_id = self.next_load_id;
        self.state = LoadState::Loading;
        self.latest_load_id
    }

    /// What: Apply the result of the load identified by `id`.
    ///
    /// Inputs:
    /// - `id`: Id returned by `begin_load`
    /// - `result`: Decoded records or the load failure
    ///
    /// Output:
    /// - What changed; see [`LoadApplied`].
    ///
    /// Details:
    /// - Success swaps in the new set wholesale.
    /// - Failure keeps the previous set (possibly empty) authoritative.
    pub fn apply_load(
        &mut self,
        id: u64,
        result: Result<Vec<BookRecord>, LoadError>,
    ) -> LoadApplied {
        if id != self.latest_load_id {
            tracing::debug!(id, latest = self.latest_load_id, "ignoring stale catalog load");
            return LoadApplied::Stale;
        }
        match result {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.state = LoadState::Ready;
                self.has_loaded = true;
                LoadApplied::Replaced(count)
            }
            Err(e) => {
                let message = e.to_string();
                self.state = LoadState::Failed(message.clone());
                LoadApplied::Failed(message)
            }
        }
    }

    /// What: Run `request` against the working set.
    ///
    /// Output:
    /// - `None` while a load is in flight or before any load has succeeded;
    ///   otherwise the query outcome.
    pub fn query(&self, request: &QueryRequest) -> Option<QueryOutcome> {
        if self.is_loading() || !self.has_loaded {
            return None;
        }
        Some(crate::logic::query(&self.records, request))
    }
}
