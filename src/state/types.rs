//! Core value types shared across the catalog, query, and UI layers.

use serde::{Deserialize, Serialize};

/// A single book entry from the catalog document.
///
/// Records are immutable once loaded; the query engine only clones and
/// reorders them. Field names follow the English schema, with the Portuguese
/// keys of the original catalog format accepted as aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title.
    #[serde(alias = "titulo")]
    pub title: String,
    /// Author display name; used as the sort key.
    #[serde(alias = "autor")]
    pub author: String,
    /// Category label; used verbatim as the grouping key.
    #[serde(alias = "categoria")]
    pub category: String,
    /// Publication year. Accepts a JSON integer or an integer string.
    #[serde(alias = "ano", deserialize_with = "crate::util::de_year")]
    pub year: i32,
    /// Cover image reference (URI or path).
    #[serde(alias = "capa")]
    pub cover: String,
    /// Short description shown on the card.
    #[serde(alias = "descricao")]
    pub description: String,
    /// External link for further reading.
    pub link: String,
}

/// Ordering applied to the filtered result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the order of the working set (no reordering after filtering).
    #[default]
    Relevance,
    /// Flat list ordered by author using locale-aware comparison.
    Author,
    /// Grouped by exact category label, authors ordered within each group.
    Category,
}

impl SortMode {
    /// Return the string key used in settings files and on the command line.
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Author => "author",
            Self::Category => "category",
        }
    }

    /// Parse a sort mode from its settings key or an accepted alias.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortMode)` on recognized value; `None` otherwise.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "relevancia" | "default" | "none" => Some(Self::Relevance),
            "author" | "autor" => Some(Self::Author),
            "category" | "categoria" => Some(Self::Category),
            _ => None,
        }
    }

    /// Next mode in the UI cycle: relevance, author, category, relevance.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Relevance => Self::Author,
            Self::Author => Self::Category,
            Self::Category => Self::Relevance,
        }
    }

    /// Short human-readable label for the status line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Author => "Author",
            Self::Category => "Category",
        }
    }
}

/// A single search submission: the term plus the ordering to apply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryRequest {
    /// Free-text term matched case-insensitively; empty matches everything.
    pub term: String,
    /// Ordering applied to the matches.
    pub mode: SortMode,
}

impl QueryRequest {
    /// Build a request from a term and a mode.
    pub fn new(term: impl Into<String>, mode: SortMode) -> Self {
        Self {
            term: term.into(),
            mode,
        }
    }
}

/// Records sharing one exact category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// The category label exactly as it appears in the records.
    pub label: String,
    /// Group members ordered by author.
    pub records: Vec<BookRecord>,
}

/// Result of running a [`QueryRequest`] against the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The filter matched nothing. A valid terminal state, not an error.
    NotFound,
    /// Flat ordered list.
    Flat(Vec<BookRecord>),
    /// Groups ordered by label.
    Grouped(Vec<CategoryGroup>),
}

impl QueryOutcome {
    /// Number of records contained in the outcome.
    pub fn len(&self) -> usize {
        match self {
            Self::NotFound => 0,
            Self::Flat(v) => v.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.records.len()).sum(),
        }
    }

    /// Whether the outcome holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One line of the rendered result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    /// Category header preceding the cards of its group.
    GroupHeader(String),
    /// A book card.
    Card(BookRecord),
}

/// User-visible notice replacing the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The last query matched no records.
    NotFound,
    /// The last catalog load failed; the prior working set is still in use.
    LoadFailed,
}

/// Which part of the screen currently receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input line.
    #[default]
    Search,
    /// Result list (cards).
    Results,
}
