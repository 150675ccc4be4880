#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Pronunciation playback capability.
///
/// The lookup path never touches audio; the render boundary hands the
/// primary audio URL to whichever player the host injected. A failure is
/// reported and dropped, it never feeds back into lookup state.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, url: &str) -> Result<(), PlaybackError>;
}

/// Placeholder collaborator: records the request in the log and succeeds.
/// Hosts with a real audio stack supply their own `AudioPlayer`.
pub struct NullPlayer;

impl AudioPlayer for NullPlayer {
    fn play(&self, url: &str) -> Result<(), PlaybackError> {
        tracing::info!("pronunciation audio delegated to host: {url}");
        Ok(())
    }
}
