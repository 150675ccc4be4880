use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::i18n::I18nConfig;

pub mod api;
pub mod i18n;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub i18n: I18nConfig,
}

impl Config {
    /// Build configuration from the environment, with fixed fallbacks for
    /// anything unset.
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            i18n: I18nConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}
