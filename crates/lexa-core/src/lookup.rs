use std::sync::{Arc, Mutex, PoisonError};

use lexa_client::{DefinitionSource, LookupError};
use lexa_types::WordEntry;
use tokio::sync::watch;
use unicode_normalization::UnicodeNormalization;

/// The one user-facing message for every failed lookup. Not-found, transport
/// failure and undecodable bodies are deliberately indistinguishable.
pub const NOT_FOUND_MESSAGE: &str =
    "We couldn't find definitions for the word you're looking for.";

/// Current position in the lookup lifecycle. Exactly one variant is active;
/// every event has a defined transition out of every variant.
#[derive(Debug, Clone, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(WordEntry),
    Failure(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            LookupState::Success(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Owns the query lifecycle: accepts a word, runs one fetch per submission
/// and exposes the resulting state.
///
/// Every submission bumps a generation counter; a completion whose
/// generation no longer matches is discarded on arrival, so a slow earlier
/// response can never clobber a faster later one. There is no physical
/// cancellation and no internal timeout: a hung transport leaves the
/// controller in `Loading` until the next submission or reset.
#[derive(Clone)]
pub struct LookupController {
    source: Arc<dyn DefinitionSource>,
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<Inner>,
    notify: watch::Sender<LookupState>,
}

struct Inner {
    generation: u64,
    state: LookupState,
}

impl LookupController {
    pub fn new(source: Arc<dyn DefinitionSource>) -> Self {
        let (notify, _) = watch::channel(LookupState::Idle);
        Self {
            source,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    generation: 0,
                    state: LookupState::Idle,
                }),
                notify,
            }),
        }
    }

    /// Submit a word for lookup. Blank input is a no-op; otherwise the state
    /// is `Loading` by the time this returns and a single fetch is in
    /// flight. Never blocks on the network.
    pub fn submit(&self, word: &str) {
        let word: String = word.trim().nfc().collect();
        let Some(generation) = self.begin(&word) else {
            return;
        };

        let controller = self.clone();
        tokio::spawn(async move {
            let outcome = controller.source.fetch(&word).await;
            controller.complete(generation, outcome);
        });
    }

    /// Snapshot of the current state. Pure read.
    pub fn current_state(&self) -> LookupState {
        self.lock().state.clone()
    }

    /// Watch feed mirroring every transition, for push-style observers.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.shared.notify.subscribe()
    }

    /// Return to `Idle` immediately. The generation bump makes any in-flight
    /// response stale, so it is ignored on arrival.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        Self::transition(&mut inner, &self.shared.notify, LookupState::Idle);
    }

    /// Start a new lookup generation, or `None` for blank input.
    fn begin(&self, word: &str) -> Option<u64> {
        if word.is_empty() {
            return None;
        }

        let mut inner = self.lock();
        inner.generation += 1;
        Self::transition(&mut inner, &self.shared.notify, LookupState::Loading);
        Some(inner.generation)
    }

    /// Apply a fetch outcome, unless a newer submission or a reset made this
    /// generation stale in the meantime.
    fn complete(&self, generation: u64, outcome: Result<Vec<WordEntry>, LookupError>) {
        let mut inner = self.lock();
        if generation != inner.generation {
            tracing::debug!("discarding stale lookup response (generation {generation})");
            return;
        }

        let state = match outcome.and_then(first_entry) {
            Ok(entry) => LookupState::Success(entry),
            Err(error) => {
                tracing::warn!("lookup failed: {error}");
                LookupState::Failure(NOT_FOUND_MESSAGE.to_string())
            }
        };
        Self::transition(&mut inner, &self.shared.notify, state);
    }

    fn transition(inner: &mut Inner, notify: &watch::Sender<LookupState>, state: LookupState) {
        inner.state = state.clone();
        notify.send_replace(state);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Short critical sections only, never held across an await.
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Normalize a response body to the single displayed entry: the first
/// element of the returned sequence, or an error for an empty one.
fn first_entry(entries: Vec<WordEntry>) -> Result<WordEntry, LookupError> {
    entries.into_iter().next().ok_or(LookupError::EmptyResponse)
}
