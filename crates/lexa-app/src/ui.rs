use std::sync::Arc;

use kanal::AsyncReceiver;
use lexa_core::types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::render;
use crate::state::AppState;

/// Render loop: projects lookup transitions and language switches to stdout.
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    {
        let locales = state.locales.read().await;
        println!("{}", render::render_chrome(&locales));
    }

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = app_to_ui_rx.recv() => event?,
        };

        match event {
            AppEvent::StateChanged(lookup_state) => {
                let locales = state.locales.read().await;
                if let Some(text) = render::render_state(&lookup_state, &locales) {
                    println!("{text}");
                }
            }
            AppEvent::LanguageChanged(code) => {
                tracing::debug!("re-rendering chrome for '{code}'");
                let locales = state.locales.read().await;
                println!("{}", render::render_chrome(&locales));
            }
            AppEvent::UiEvent(_) => {
                // Travels the other way; not for the render loop.
            }
        }
    }
}
