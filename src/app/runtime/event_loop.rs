use tokio::select;

use crate::app::terminal::Tui;
use crate::logic::handle_load_result;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Wait for and process one message from any channel.
///
/// Output: `true` if the event loop should exit, `false` to continue
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.load_req_tx)
        }
        Some(res) = channels.load_res_rx.recv() => {
            handle_load_result(app, res.id, res.result);
            false
        }
        else => false
    }
}

/// What: Render a frame, then handle the next message, until an event asks to exit.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
pub async fn run_event_loop(
    terminal: &mut Option<Tui>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
