use crate::lookup::LookupState;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Snapshot of the lookup state after a transition.
    StateChanged(LookupState),
    /// The active language changed; chrome must re-render.
    LanguageChanged(String),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Search(String),
    SelectLanguage(String),
    PlayAudio,
    Reset,
    Close,
}
