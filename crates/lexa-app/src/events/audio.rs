use lexa_audio::AudioPlayer;
use lexa_core::LookupController;

/// Play the current entry's pronunciation, if it has one. Playback failure
/// is logged and dropped; it never touches lookup state.
pub fn handle_play_audio(lookup: &LookupController, player: &dyn AudioPlayer) {
    let state = lookup.current_state();
    let Some(url) = state.entry().and_then(|entry| entry.primary_audio()) else {
        tracing::debug!("no pronunciation audio for the current entry");
        return;
    };

    if let Err(error) = player.play(url) {
        tracing::warn!("Error playing audio: {error}");
    }
}
