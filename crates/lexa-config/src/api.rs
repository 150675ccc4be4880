use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://english-dictionary-f4vy.onrender.com".to_string()
}

/// Definition service endpoint. `DICTIONARY_API_URL` overrides the base URL;
/// it is the only environment variable the lookup path consults.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_base_url());

        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
