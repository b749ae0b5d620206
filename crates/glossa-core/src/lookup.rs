use std::sync::Arc;

use glossa_dictionary::DictionaryProvider;
use glossa_store::WordStore;
use glossa_translate::{TranslationData, Translator};
use glossa_types::{Candidate, DictionaryData, Translation, TranslationMeta, Word};
use serde::Serialize;

use crate::error::LookupError;
use crate::normalize::normalize_word;

/// Unified payload for one served lookup. `google` holds the translation
/// engine's word metadata, `collins` the dictionary entry; either may be
/// null when its source had nothing to contribute.
#[derive(Debug, Clone, Serialize)]
pub struct WordData {
    pub word: String,
    pub translations: Vec<Candidate>,
    pub google: Option<TranslationMeta>,
    pub collins: Option<DictionaryData>,
}

#[derive(Debug)]
pub enum LookupOutcome {
    Found(WordData),
    /// The translation engine affirmatively knows nothing about the word.
    NotFound,
}

/// Coordinates the cache check, the fallback fetches, and persistence for
/// one word lookup.
pub struct LookupService {
    store: Arc<dyn WordStore>,
    translator: Arc<dyn Translator>,
    dictionary: Arc<dyn DictionaryProvider>,
}

impl LookupService {
    pub fn new(
        store: Arc<dyn WordStore>,
        translator: Arc<dyn Translator>,
        dictionary: Arc<dyn DictionaryProvider>,
    ) -> Self {
        Self {
            store,
            translator,
            dictionary,
        }
    }

    /// Serve one lookup: try the translation cache first, fetch and persist
    /// on a miss, and append a usage record for every served result. A word
    /// the engine does not know is reported without touching storage.
    pub async fn lookup_word(
        &self,
        word: &str,
        language: &str,
        actor: &str,
    ) -> Result<LookupOutcome, LookupError> {
        let word = normalize_word(word);
        let language = self.resolve_language(language).await?;

        if let Some(cached) = self.store.translation(&word, &language).await? {
            tracing::debug!("cache hit for ({word:?}, {language:?})");
            let record = self.store.word_by_name(&word).await?;
            self.store.record_lookup(actor, &word).await?;
            return Ok(LookupOutcome::Found(Self::word_data(word, cached, record)));
        }

        let Some(data) = self.translator.lookup(&word, language.clone()).await? else {
            tracing::info!("word {word:?} not found upstream");
            return Ok(LookupOutcome::NotFound);
        };

        let record = self.materialize_word(&word, &data).await?;

        let translation = self
            .store
            .insert_translation(Translation {
                word: word.clone(),
                language,
                primary: data.primary,
                candidates: data.candidates,
            })
            .await?;

        self.store.record_lookup(actor, &word).await?;

        Ok(LookupOutcome::Found(Self::word_data(
            word,
            translation,
            Some(record),
        )))
    }

    /// Dictionary data is language-independent, so it is fetched at most
    /// once per word: an existing word record is reused as is, and a lost
    /// insert race resolves to whatever the winner stored.
    async fn materialize_word(
        &self,
        name: &str,
        data: &TranslationData,
    ) -> Result<Word, LookupError> {
        if let Some(existing) = self.store.word_by_name(name).await? {
            return Ok(existing);
        }

        let dictionary = self.dictionary.entry(name).await;

        let word = Word {
            name: name.to_string(),
            dictionary,
            translation_meta: Some(TranslationMeta {
                transcription: data.transcription.clone(),
                examples: data.examples.clone(),
                definitions: data.definitions.clone(),
            }),
        };

        Ok(self.store.insert_word(word).await?)
    }

    /// An unknown requested code falls back to the default language.
    async fn resolve_language(&self, code: &str) -> Result<String, LookupError> {
        let code = code.to_lowercase();
        if let Some(language) = self.store.language_by_code(&code).await? {
            return Ok(language.code);
        }

        tracing::debug!("unknown language code {code:?}, using the default");
        let default = self.store.default_language().await?;
        default.map(|l| l.code).ok_or(LookupError::NoLanguages)
    }

    fn word_data(word: String, translation: Translation, record: Option<Word>) -> WordData {
        let (google, collins) = match record {
            Some(record) => (record.translation_meta, record.dictionary),
            None => (None, None),
        };

        WordData {
            word,
            translations: translation.candidates,
            google,
            collins,
        }
    }
}
