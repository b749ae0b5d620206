pub mod client;
pub mod response;

pub use client::GoogleTranslateClient;
pub use response::{TranslationData, parse_translate_payload, rank_frequency};

pub type LanguageCode = String;

/// Translation engine interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Look up a word in the target language.
    ///
    /// `Ok(None)` means the engine affirmatively knows nothing about the
    /// word; `Err` means the engine could not be reached or understood.
    async fn lookup(
        &self,
        word: &str,
        to: LanguageCode,
    ) -> Result<Option<TranslationData>, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("undecodable response: {0}")]
    DecodeError(#[from] serde_json::Error),
}
