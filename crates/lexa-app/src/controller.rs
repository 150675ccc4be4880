use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexa_audio::AudioPlayer;
use lexa_core::types::AppEvent;
use lexa_core::{LookupController, LookupState};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        lookup: LookupController,
        player: Arc<dyn AudioPlayer>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            lookup.clone(),
            player,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        // Render loop
        tasks.spawn(ui_loop(
            self.state.clone(),
            self.channels.app_to_ui.1.clone(),
            self.cancel_token.clone(),
        ));

        // Stdin watcher
        tasks.spawn(watcher_io(
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.clone(),
        ));

        // Lookup state feed
        tasks.spawn(forward_state(
            lookup.subscribe(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// Mirror every lookup transition onto the ui channel as a render event.
pub async fn forward_state(
    mut lookup_rx: watch::Receiver<LookupState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            changed = lookup_rx.changed() => {
                if changed.is_err() {
                    // Controller dropped; nothing left to forward.
                    return Ok(());
                }
                let state = lookup_rx.borrow_and_update().clone();
                app_to_ui_tx.send(AppEvent::StateChanged(state)).await?;
            }
        }
    }
}
