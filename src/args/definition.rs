//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::app::RunOptions;
use crate::state::SortMode;
use crate::theme::{PreferenceStore, Settings};

/// bookcase - browse a book catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "bookcase")]
#[command(version)]
#[command(about = "Browse, filter and sort a book catalog from the terminal", long_about = None)]
pub struct Args {
    /// Catalog document to load: a local path or an http(s) URL (default: books.json)
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Search from the command line, print the results and exit
    #[arg(short, long)]
    pub search: Option<String>,

    /// Result ordering: relevance, author or category
    #[arg(long, value_parser = parse_sort_mode)]
    pub sort: Option<SortMode>,

    /// Preference file holding the light/dark flag (default: ~/.config/bookcase/prefs.conf)
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_sort_mode(s: &str) -> Result<SortMode, String> {
    SortMode::from_config_key(s)
        .ok_or_else(|| format!("unknown sort mode '{s}' (expected relevance, author or category)"))
}

impl Args {
    /// Catalog source: `--catalog` wins over `settings.conf`.
    pub fn catalog_source(&self, settings: &Settings) -> String {
        self.catalog
            .clone()
            .unwrap_or_else(|| settings.catalog_source.clone())
    }

    /// Initial sort mode: `--sort` wins over `settings.conf`.
    pub fn sort_mode(&self, settings: &Settings) -> SortMode {
        self.sort.unwrap_or(settings.sort_mode)
    }

    /// What: Resolve the TUI startup options.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf`
    ///
    /// Output:
    /// - Options with command-line values applied over the settings file.
    pub fn run_options(&self, settings: &Settings) -> RunOptions {
        let prefs = self
            .prefs
            .clone()
            .map_or_else(PreferenceStore::default_location, PreferenceStore::new);
        RunOptions {
            catalog_source: self.catalog_source(settings),
            sort_mode: self.sort_mode(settings),
            prefs,
        }
    }
}
