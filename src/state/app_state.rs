//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::logic::CatalogEngine;
use crate::state::modal::Modal;
use crate::state::types::{BookRecord, DisplayRow, Focus, Notice, QueryOutcome, QueryRequest, SortMode};
use crate::theme::{PreferenceStore, ThemeMode};

/// Application state shared by the event, loading, and UI layers.
///
/// The working set lives inside [`CatalogEngine`]; everything else here is
/// presentation state derived from the last query.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Which area receives typed keys.
    pub focus: Focus,
    /// Ordering applied to the next (and re-run) query.
    pub sort_mode: SortMode,
    /// Owner of the working set and its load state.
    pub engine: CatalogEngine,
    /// Path or URL the working set is loaded from.
    pub catalog_source: String,
    /// Outcome of the last executed query, if any.
    pub outcome: Option<QueryOutcome>,
    /// Rows derived from `outcome` for rendering.
    pub rows: Vec<DisplayRow>,
    /// Notice shown instead of the rows.
    pub notice: Option<Notice>,
    /// Last request that produced `outcome`; re-run when the sort mode changes.
    pub last_request: Option<QueryRequest>,
    /// Request submitted while the working set was unavailable.
    pub pending: Option<QueryRequest>,
    /// Index into `rows` of the highlighted card.
    pub selected: usize,
    /// List selection state for the results widget.
    pub list_state: ListState,
    /// Active modal overlay.
    pub modal: Modal,
    /// Effective color scheme.
    pub theme_mode: ThemeMode,
    /// Where the theme preference is persisted.
    pub prefs: PreferenceStore,
    /// Inner area of the results list from the last frame `(x, y, w, h)`.
    pub results_rect: Option<(u16, u16, u16, u16)>,
    /// Area of the cover modal from the last frame `(x, y, w, h)`.
    pub cover_rect: Option<(u16, u16, u16, u16)>,
}

impl AppState {
    /// What: Build the initial state for a session.
    ///
    /// Inputs:
    /// - `catalog_source`: path or URL of the catalog document
    /// - `prefs`: preference store; its stored theme is read once here
    /// - `sort_mode`: initial ordering
    ///
    /// Output:
    /// - Fresh state with an empty working set and no results.
    pub fn new(catalog_source: impl Into<String>, prefs: PreferenceStore, sort_mode: SortMode) -> Self {
        let theme_mode = prefs.load();
        Self {
            input: String::new(),
            focus: Focus::Search,
            sort_mode,
            engine: CatalogEngine::default(),
            catalog_source: catalog_source.into(),
            outcome: None,
            rows: Vec::new(),
            notice: None,
            last_request: None,
            pending: None,
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
            theme_mode,
            prefs,
            results_rect: None,
            cover_rect: None,
        }
    }

    /// What: Replace the displayed results with a new query outcome.
    ///
    /// Details:
    /// - `NotFound` clears the rows and raises the not-found notice.
    /// - Selection moves to the first card.
    pub fn show_outcome(&mut self, outcome: QueryOutcome) {
        self.rows = crate::ui::rows(&outcome);
        self.notice = matches!(outcome, QueryOutcome::NotFound).then_some(Notice::NotFound);
        self.outcome = Some(outcome);
        self.select_first_card();
    }

    /// Drop the displayed results and any notice.
    pub fn clear_results(&mut self) {
        self.outcome = None;
        self.rows.clear();
        self.notice = None;
        self.last_request = None;
        self.selected = 0;
        self.list_state.select(None);
    }

    /// Show the load-failure notice in place of the results.
    pub fn show_load_failure(&mut self) {
        self.outcome = None;
        self.rows.clear();
        self.notice = Some(Notice::LoadFailed);
        self.selected = 0;
        self.list_state.select(None);
    }

    /// Highlight the first card row, or nothing when there are no cards.
    pub fn select_first_card(&mut self) {
        match self.rows.iter().position(|r| matches!(r, DisplayRow::Card(_))) {
            Some(i) => {
                self.selected = i;
                self.list_state.select(Some(i));
            }
            None => {
                self.selected = 0;
                self.list_state.select(None);
            }
        }
    }

    /// What: Move the highlight by `delta` cards, skipping group headers.
    ///
    /// Details:
    /// - Clamps at both ends of the list; no wrap-around.
    pub fn move_selection(&mut self, delta: isize) {
        let cards: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| matches!(r, DisplayRow::Card(_)).then_some(i))
            .collect();
        if cards.is_empty() {
            return;
        }
        let current = cards.iter().position(|&i| i == self.selected).unwrap_or(0);
        let target = current
            .saturating_add_signed(delta)
            .min(cards.len().saturating_sub(1));
        self.selected = cards[target];
        self.list_state.select(Some(self.selected));
    }

    /// Select the row at `index` if it is a card. Returns whether it was.
    pub fn select_row(&mut self, index: usize) -> bool {
        if matches!(self.rows.get(index), Some(DisplayRow::Card(_))) {
            self.selected = index;
            self.list_state.select(Some(index));
            true
        } else {
            false
        }
    }

    /// The highlighted record, if any.
    pub fn selected_record(&self) -> Option<&BookRecord> {
        match self.rows.get(self.selected) {
            Some(DisplayRow::Card(record)) => Some(record),
            _ => None,
        }
    }
}
