use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::catalog::{LoadRequest, LoadResponse, load};

/// What: Spawn the catalog loader task.
///
/// Inputs:
/// - `req_rx`: Load requests from the event loop
/// - `res_tx`: Where finished loads are reported, tagged with their id
///
/// Details:
/// - Each request is loaded on its own task so a slow remote source never
///   blocks a later reload; stale results are discarded by the engine.
pub fn spawn_loader_worker(
    mut req_rx: mpsc::UnboundedReceiver<LoadRequest>,
    res_tx: mpsc::UnboundedSender<LoadResponse>,
) {
    tokio::spawn(async move {
        while let Some(LoadRequest { id, source }) = req_rx.recv().await {
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                tracing::debug!(id, source = %source, "loading catalog");
                let result = load(&source).await;
                if let Err(e) = &result {
                    tracing::warn!(id, source = %source, error = %e, "catalog load error");
                }
                let _ = res_tx.send(LoadResponse { id, result });
            });
        }
    });
}

/// What: Spawn the terminal event reader thread.
///
/// Inputs:
/// - `headless`: When `true` no thread is started
/// - `event_tx`: Where terminal events are forwarded
/// - `cancelled`: Flag checked between polls so the thread exits promptly
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
