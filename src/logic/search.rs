//! Search submission, sort-mode changes, and catalog load completion.
//!
//! These functions mutate [`AppState`] in response to user actions and load
//! results. Nothing here touches the terminal, so the whole flow can be
//! driven directly from tests.

use tokio::sync::mpsc;

use crate::catalog::{LoadError, LoadRequest};
use crate::logic::engine::LoadApplied;
use crate::state::{AppState, BookRecord, QueryRequest};

/// What: Submit the current input as a query with the current sort mode.
///
/// Inputs:
/// - `app`: Application state (input, sort mode, engine)
/// - `load_tx`: Channel to request a catalog load when none is available
///
/// Output:
/// - Shows the outcome and clears the input, or defers the request until a load completes.
pub fn submit_search(app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadRequest>) {
    let request = QueryRequest::new(app.input.clone(), app.sort_mode);
    if execute(app, request.clone()) {
        app.input.clear();
    } else {
        defer(app, request, load_tx);
    }
}

/// What: Advance the sort mode and re-run the last query with it.
///
/// Details:
/// - When nothing has been queried yet only the mode changes.
/// - The input line is left untouched.
pub fn cycle_sort_mode(app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadRequest>) {
    app.sort_mode = app.sort_mode.next();
    tracing::debug!(mode = app.sort_mode.as_config_key(), "sort mode changed");
    if let Some(prev) = app.last_request.clone() {
        let request = QueryRequest::new(prev.term, app.sort_mode);
        if !execute(app, request.clone()) {
            defer(app, request, load_tx);
        }
    }
}

/// Clear the input, the displayed results, and any deferred request.
pub fn clear_search(app: &mut AppState) {
    app.input.clear();
    app.pending = None;
    app.clear_results();
}

/// What: Start a catalog load from `app.catalog_source`.
///
/// Details:
/// - The fresh load id supersedes any load still in flight.
/// - If the loader has stopped the load fails at once, so the engine never waits on it.
pub fn request_reload(app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadRequest>) {
    let id = app.engine.begin_load();
    tracing::info!(id, source = %app.catalog_source, "catalog load requested");
    let request = LoadRequest {
        id,
        source: app.catalog_source.clone(),
    };
    if load_tx.send(request).is_err() {
        handle_load_result(app, id, Err(LoadError::LoaderStopped));
    }
}

/// What: Apply a finished catalog load and run whatever was waiting on it.
///
/// Inputs:
/// - `app`: Application state
/// - `id`: Load id the result belongs to
/// - `result`: Records or the load error
///
/// Details:
/// - Success runs the deferred request if any, otherwise re-runs the last query against
///   the new working set.
/// - Failure drops the deferred request and shows the failure notice; the user retries.
pub fn handle_load_result(
    app: &mut AppState,
    id: u64,
    result: Result<Vec<BookRecord>, LoadError>,
) {
    match app.engine.apply_load(id, result) {
        LoadApplied::Stale => {}
        LoadApplied::Replaced(count) => {
            tracing::info!(id, count, "catalog loaded");
            if let Some(request) = app.pending.take() {
                let term = request.term.clone();
                if execute(app, request) && app.input == term {
                    app.input.clear();
                }
            } else if let Some(prev) = app.last_request.clone() {
                execute(app, prev);
            }
        }
        LoadApplied::Failed(message) => {
            tracing::warn!(id, error = %message, "catalog load failed");
            app.pending = None;
            app.show_load_failure();
        }
    }
}

/// Run `request` if the working set is available. Returns whether it ran.
fn execute(app: &mut AppState, request: QueryRequest) -> bool {
    let Some(outcome) = app.engine.query(&request) else {
        return false;
    };
    tracing::info!(
        term = %request.term,
        mode = request.mode.as_config_key(),
        matches = outcome.len(),
        "query executed"
    );
    app.show_outcome(outcome);
    app.last_request = Some(request);
    true
}

/// Keep `request` until the working set is available, starting a load if none is running.
fn defer(app: &mut AppState, request: QueryRequest, load_tx: &mpsc::UnboundedSender<LoadRequest>) {
    tracing::debug!(term = %request.term, "query deferred until catalog is loaded");
    app.pending = Some(request);
    if !app.engine.is_loading() {
        request_reload(app, load_tx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{CatalogEngine, LoadState};
    use crate::state::{Notice, QueryOutcome, SortMode};
    use crate::test_utils::{new_app, sample_records};

    fn io_error() -> LoadError {
        LoadError::Io(std::io::Error::other("unreachable"))
    }

    #[test]
    /// What: Submitting against a loaded set shows results and clears the input
    fn submit_with_loaded_set() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        app.input = "fiction".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        assert!(app.input.is_empty());
        assert_eq!(app.outcome.as_ref().map(QueryOutcome::len), Some(2));
        assert_eq!(app.last_request.as_ref().map(|r| r.term.as_str()), Some("fiction"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Zero matches show the not-found notice
    fn submit_not_found() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        app.input = "xyz-nomatch".into();
        let (tx, _rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        assert_eq!(app.notice, Some(Notice::NotFound));
        assert_eq!(app.outcome, Some(QueryOutcome::NotFound));
    }

    #[test]
    /// What: Submitting before any load defers the request and starts one
    ///
    /// - Input: Empty engine; submit "amy"; then the load completes
    /// - Output: One load request sent; pending runs on completion and input clears
    fn submit_defers_until_loaded() {
        let mut app = new_app();
        app.input = "amy".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        assert!(app.pending.is_some());
        assert_eq!(app.input, "amy");
        let req = rx.try_recv().expect("load requested");
        assert_eq!(req.source, app.catalog_source);

        // Second submit while loading does not start another load
        submit_search(&mut app, &tx);
        assert!(rx.try_recv().is_err());

        handle_load_result(&mut app, req.id, Ok(sample_records()));
        assert!(app.pending.is_none());
        assert!(app.input.is_empty());
        assert_eq!(app.outcome.as_ref().map(QueryOutcome::len), Some(1));
    }

    #[test]
    /// What: A failed load shows the failure notice and drops the pending request
    fn load_failure_notice() {
        let mut app = new_app();
        app.input = "amy".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        let req = rx.try_recv().expect("load requested");
        handle_load_result(&mut app, req.id, Err(io_error()));
        assert_eq!(app.notice, Some(Notice::LoadFailed));
        assert!(app.pending.is_none());
        assert_eq!(app.input, "amy");

        // Retrying triggers a fresh load
        submit_search(&mut app, &tx);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    /// What: Changing the sort mode re-runs the last query
    fn cycle_reruns_last_query() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        let (tx, _rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        assert_eq!(app.sort_mode, SortMode::Relevance);
        app.input = "typed".into();
        cycle_sort_mode(&mut app, &tx);
        assert_eq!(app.sort_mode, SortMode::Author);
        assert_eq!(app.input, "typed");
        let Some(QueryOutcome::Flat(list)) = &app.outcome else {
            panic!("expected flat outcome");
        };
        assert_eq!(list[0].author, "Amy");
        cycle_sort_mode(&mut app, &tx);
        assert!(matches!(app.outcome, Some(QueryOutcome::Grouped(_))));
    }

    #[test]
    /// What: Clearing removes input, results, and pending request
    fn clear_resets_everything() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        let (tx, _rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        app.input = "abc".into();
        clear_search(&mut app);
        assert!(app.input.is_empty());
        assert!(app.outcome.is_none());
        assert!(app.rows.is_empty());
        assert!(app.last_request.is_none());
    }

    #[test]
    /// What: A stopped loader fails the load instead of leaving it in flight
    ///
    /// - Input: Receiver dropped; submit "amy" with no working set
    /// - Output: Failure notice, engine not loading, request dropped, input kept
    fn stopped_loader_fails_load() {
        let mut app = new_app();
        app.input = "amy".into();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        submit_search(&mut app, &tx);
        assert!(!app.engine.is_loading());
        assert!(matches!(app.engine.state(), LoadState::Failed(_)));
        assert_eq!(app.notice, Some(Notice::LoadFailed));
        assert!(app.pending.is_none());
        assert_eq!(app.input, "amy");
    }

    #[test]
    /// What: A stopped loader during reload keeps the current working set usable
    fn stopped_loader_keeps_working_set() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        request_reload(&mut app, &tx);
        assert!(!app.engine.is_loading());
        app.input = "amy".into();
        submit_search(&mut app, &tx);
        assert!(app.input.is_empty());
        assert_eq!(app.outcome.as_ref().map(QueryOutcome::len), Some(1));
    }

    #[test]
    /// What: A reload re-runs the last query against the new working set
    fn reload_reruns_last_query() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_search(&mut app, &tx);
        request_reload(&mut app, &tx);
        let req = rx.try_recv().expect("load requested");
        let mut fewer = sample_records();
        fewer.truncate(1);
        handle_load_result(&mut app, req.id, Ok(fewer));
        assert_eq!(app.outcome.as_ref().map(QueryOutcome::len), Some(1));
    }
}
