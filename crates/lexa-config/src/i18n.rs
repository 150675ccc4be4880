use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct I18nConfig {
    /// Language selected at startup and used as the fallback for unknown
    /// codes.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl I18nConfig {
    pub fn new() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self::new()
    }
}
