use std::time::Duration;

use glossa_config::dictionary::DictionaryConfig;
use glossa_types::DictionaryData;
use serde::Deserialize;

use crate::entry::parse_entry_markup;

/// Source of language-independent dictionary data.
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Fetch the entry for a word, or nothing when the source has no entry
    /// or is unavailable. Transport failures never escape this call.
    async fn entry(&self, word: &str) -> Option<DictionaryData>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("dictionary API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("no entry in dictionary response")]
    NoEntry,
}

/// Search responses wrap the entry markup in a JSON envelope.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "entryContent")]
    entry_content: String,
}

/// Dictionary API client.
#[derive(Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl DictionaryClient {
    pub fn new(config: &DictionaryConfig, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout,
        }
    }

    async fn fetch_entry(&self, word: &str) -> Result<DictionaryData, DictionaryError> {
        let url = format!(
            "{}/search/first/?q={}&format=html",
            self.base_url,
            urlencoding::encode(word)
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .header("accessKey", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DictionaryError::Status(response.status()));
        }

        let search: SearchResponse = response.json().await?;
        parse_entry_markup(&search.entry_content).ok_or(DictionaryError::NoEntry)
    }
}

#[async_trait::async_trait]
impl DictionaryProvider for DictionaryClient {
    async fn entry(&self, word: &str) -> Option<DictionaryData> {
        match self.fetch_entry(word).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("dictionary lookup for {word:?} failed: {e}");
                None
            }
        }
    }
}
