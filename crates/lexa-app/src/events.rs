use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexa_audio::AudioPlayer;
use lexa_core::LookupController;
use lexa_core::types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod audio;
pub mod language;
pub mod lookup;

use audio::handle_play_audio;
use language::handle_language_select;
use lookup::{handle_reset, handle_search};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    lookup: LookupController,
    player: Arc<dyn AudioPlayer>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = ui_to_app_rx.recv() => event?,
        };

        handle_events(
            &state,
            &lookup,
            player.as_ref(),
            &app_to_ui_tx,
            &cancel,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: &AppState,
    lookup: &LookupController,
    player: &dyn AudioPlayer,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(event) => match event {
            UiEvent::Search(word) => handle_search(lookup, &word),
            UiEvent::SelectLanguage(code) => {
                handle_language_select(state, app_to_ui_tx, &code).await?;
            }
            UiEvent::PlayAudio => handle_play_audio(lookup, player),
            UiEvent::Reset => handle_reset(lookup),
            UiEvent::Close => {
                tracing::info!("close requested");
                cancel.cancel();
            }
        },
        AppEvent::StateChanged(_) | AppEvent::LanguageChanged(_) => {
            // UI-bound events, nothing to do here
        }
    }

    Ok(())
}
