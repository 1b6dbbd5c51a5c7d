use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::catalog::{LoadRequest, LoadResponse};

/// What: Channels connecting the event loop to its background workers.
///
/// Details:
/// - `event_*` carries terminal events from the reader thread.
/// - `load_req_*` carries load requests to the loader task; `load_res_*` brings results back.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub load_req_tx: mpsc::UnboundedSender<LoadRequest>,
    pub load_req_rx: Option<mpsc::UnboundedReceiver<LoadRequest>>,
    pub load_res_tx: mpsc::UnboundedSender<LoadResponse>,
    pub load_res_rx: mpsc::UnboundedReceiver<LoadResponse>,
}

impl Channels {
    /// Create every channel; the loader takes `load_req_rx` when it is spawned.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (load_req_tx, load_req_rx) = mpsc::unbounded_channel();
        let (load_res_tx, load_res_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            load_req_tx,
            load_req_rx: Some(load_req_rx),
            load_res_tx,
            load_res_rx,
        }
    }
}
