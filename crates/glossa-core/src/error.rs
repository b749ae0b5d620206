use glossa_store::StoreError;
use glossa_translate::TranslateError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The translation engine could not be reached or understood; without
    /// it there is nothing to serve.
    #[error("translation source unavailable: {0}")]
    SourceUnavailable(#[from] TranslateError),

    #[error("language registry is empty; seed it at startup")]
    NoLanguages,
}
