use kanal::AsyncSender;
use lexa_core::types::AppEvent;

use crate::state::AppState;

/// Switch the active language and tell the render loop to redraw its chrome.
/// The store handles unknown codes itself, so the event carries whatever
/// language actually ended up active.
pub async fn handle_language_select(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    code: &str,
) -> anyhow::Result<()> {
    let active = {
        let mut locales = state.locales.write().await;
        locales.set_active_language(code);
        locales.active_language().to_string()
    };

    tracing::info!("active language: {active}");
    app_to_ui_tx.send(AppEvent::LanguageChanged(active)).await?;

    Ok(())
}
