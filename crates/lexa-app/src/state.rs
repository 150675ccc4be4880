use std::sync::Arc;

use lexa_i18n::LocaleStore;
use tokio::sync::RwLock;

/// State shared between the event loop (which switches languages) and the
/// render loop (which reads translations). The lookup controller carries its
/// own state and is not part of this.
pub struct AppState {
    pub locales: Arc<RwLock<LocaleStore>>,
}

impl AppState {
    pub fn new(locales: LocaleStore) -> Self {
        Self {
            locales: Arc::new(RwLock::new(locales)),
        }
    }
}
