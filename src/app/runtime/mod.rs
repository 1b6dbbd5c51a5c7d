use std::sync::atomic::Ordering;

use crate::logic::request_reload;
use crate::state::{AppState, SortMode};
use crate::theme::PreferenceStore;

use super::terminal::{open_terminal, restore_terminal};

mod background;
mod channels;
mod event_loop;

use background::{spawn_event_thread, spawn_loader_worker};
use channels::Channels;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup options resolved from the command line and `settings.conf`.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path or URL of the catalog document.
    pub catalog_source: String,
    /// Ordering selected at startup.
    pub sort_mode: SortMode,
    /// Where the theme preference lives.
    pub prefs: PreferenceStore,
}

/// What: Run the bookcase TUI end-to-end.
///
/// Inputs:
/// - `options`: Catalog source, initial sort mode and preference store
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Starts the catalog load immediately so the first search usually finds the working set ready.
/// - With `BOOKCASE_TEST_HEADLESS=1` no terminal is touched and no event thread is started.
/// - Restores the terminal before returning.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var("BOOKCASE_TEST_HEADLESS").ok().as_deref() == Some("1");
    let mut terminal = if headless {
        None
    } else {
        Some(open_terminal()?)
    };

    let mut app = AppState::new(options.catalog_source, options.prefs, options.sort_mode);
    tracing::info!(
        source = %app.catalog_source,
        mode = app.sort_mode.as_config_key(),
        theme = app.theme_mode.as_str(),
        "bookcase starting"
    );

    let mut channels = Channels::new();
    if let Some(req_rx) = channels.load_req_rx.take() {
        spawn_loader_worker(req_rx, channels.load_res_tx.clone());
    }
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    request_reload(&mut app, &channels.load_req_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    tracing::info!("bookcase exiting");

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
