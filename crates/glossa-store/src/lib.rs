use glossa_types::{Language, Translation, Word};

pub mod languages;
pub mod memory;

pub use languages::default_languages;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Cache storage for words, translations, and the usage log.
///
/// Implementations must enforce uniqueness on `Word::name` and on the
/// `(word, language)` translation key. The `insert_*` operations never fail
/// on a duplicate: whoever loses a concurrent create gets the record the
/// winner stored.
#[async_trait::async_trait]
pub trait WordStore: Send + Sync {
    async fn word_by_name(&self, name: &str) -> Result<Option<Word>, StoreError>;

    async fn translation(
        &self,
        word: &str,
        language: &str,
    ) -> Result<Option<Translation>, StoreError>;

    /// Insert a word; on a name conflict the already-stored record wins and
    /// is returned.
    async fn insert_word(&self, word: Word) -> Result<Word, StoreError>;

    /// Insert a translation; on a key conflict the already-stored record
    /// wins and is returned.
    async fn insert_translation(
        &self,
        translation: Translation,
    ) -> Result<Translation, StoreError>;

    /// Append one usage record. Write-only from the core's point of view.
    async fn record_lookup(&self, actor: &str, word: &str) -> Result<(), StoreError>;

    /// Populate the language registry. Idempotent: seeding an already-seeded
    /// store is a no-op. Run once at startup, outside the lookup path.
    async fn seed_languages(&self, languages: &[Language]) -> Result<(), StoreError>;

    async fn language_by_code(&self, code: &str) -> Result<Option<Language>, StoreError>;

    /// The fallback language: the first one seeded.
    async fn default_language(&self) -> Result<Option<Language>, StoreError>;
}
