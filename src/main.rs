//! bookcase binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use bookcase::args::{Args, determine_log_level, handle_search};
use bookcase::theme::{logs_dir, settings};
use clap::Parser;

struct BookcaseTimer;

impl tracing_subscriber::fmt::time::FormatTime for BookcaseTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()
            .and_then(|d| i64::try_from(d.as_secs()).ok())
            .unwrap_or(0);
        let s = bookcase::util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        w.write_str(&s.replacen(' ', "T", 1))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config>/logs/bookcase.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
/// - `ansi`: Whether the stderr fallback may use colors
fn init_logging(level: &str, ansi: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = logs_dir().join("bookcase.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(BookcaseTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .with_timer(BookcaseTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args), !args.no_color);

    let settings = settings();

    if let Some(term) = &args.search {
        let code = handle_search(
            term,
            &args.catalog_source(&settings),
            args.sort_mode(&settings),
            !args.no_color,
        )
        .await;
        std::process::exit(code);
    }

    tracing::info!("bookcase starting");
    if let Err(err) = bookcase::app::run(args.run_options(&settings)).await {
        tracing::error!(error = ?err, "application error");
    }
    tracing::info!("bookcase exited");
}
