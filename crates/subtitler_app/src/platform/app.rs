use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use subtitler_client::ClientSettings;
use subtitler_core::{update, AppState, Msg};
use ui_logging::ui_info;

use super::dom::{DomSurface, LoggingDomSurface};
use super::effects::EffectRunner;
use super::snapshot::PageSnapshot;
use super::ui;

const IDLE_POLL: Duration = Duration::from_millis(100);

/// Runs the controller loop headlessly: seed the page, execute effects, and
/// keep pumping messages until every seeded card reached a terminal status.
pub fn run_app(base_url: String, snapshot: Option<PathBuf>) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let settings = ClientSettings {
        base_url,
        ..ClientSettings::default()
    };
    let mut runner = EffectRunner::new(settings, msg_tx.clone())?;
    let mut surface = LoggingDomSurface;
    let mut state = AppState::new();

    let snapshot = match snapshot {
        Some(path) => PageSnapshot::load(&path)?,
        None => PageSnapshot::default(),
    };
    let _ = msg_tx.send(snapshot.into_page_loaded());

    loop {
        let msg = match msg_rx.recv_timeout(IDLE_POLL) {
            Ok(msg) => msg,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if state.has_active_cards() {
                    continue;
                }
                break;
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects, &mut surface);

        if state.consume_dirty() {
            for patch in ui::render::render(&state.view()) {
                surface.apply(patch);
            }
        }
    }

    ui_info!("All jobs settled; stopping timers and shutting down");
    runner.shutdown();
    Ok(())
}
