use async_trait::async_trait;
use lexa_types::WordEntry;

use crate::error::LookupError;

/// Source of dictionary entries for a queried word.
///
/// The lookup controller only depends on this seam; the network-backed
/// implementation lives below, test doubles script their own responses.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Fetch all entries for `word`. The word arrives already normalized;
    /// encoding it into the transport is the implementation's job.
    async fn fetch(&self, word: &str) -> Result<Vec<WordEntry>, LookupError>;
}

/// Client for a dictionaryapi.dev-shaped definition service.
#[derive(Clone)]
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn definition_url(&self, word: &str) -> String {
        format!("{}/definition/{}", self.base_url, urlencoding::encode(word))
    }
}

#[async_trait]
impl DefinitionSource for DictionaryClient {
    async fn fetch(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        let url = self.definition_url(word);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(LookupError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<WordEntry>>()
            .await
            .map_err(LookupError::Decode)
    }
}
