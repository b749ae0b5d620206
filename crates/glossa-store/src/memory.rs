use std::collections::HashMap;

use chrono::Utc;
use glossa_types::{Language, LookupEvent, Translation, Word};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{StoreError, WordStore};

/// In-memory reference implementation of [`WordStore`].
///
/// Uniqueness is enforced by the map keys; a concurrent duplicate insert
/// resolves to the record that got in first.
#[derive(Default)]
pub struct MemoryStore {
    words: RwLock<HashMap<String, Word>>,
    translations: RwLock<HashMap<(String, String), Translation>>,
    languages: RwLock<Vec<Language>>,
    events: RwLock<Vec<LookupEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of usage records written so far.
    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }
}

#[async_trait::async_trait]
impl WordStore for MemoryStore {
    async fn word_by_name(&self, name: &str) -> Result<Option<Word>, StoreError> {
        Ok(self.words.read().await.get(name).cloned())
    }

    async fn translation(
        &self,
        word: &str,
        language: &str,
    ) -> Result<Option<Translation>, StoreError> {
        let key = (word.to_string(), language.to_string());
        Ok(self.translations.read().await.get(&key).cloned())
    }

    async fn insert_word(&self, word: Word) -> Result<Word, StoreError> {
        let mut words = self.words.write().await;
        match words.get(&word.name) {
            Some(existing) => {
                tracing::debug!("word {:?} already stored, keeping the existing record", word.name);
                Ok(existing.clone())
            }
            None => {
                words.insert(word.name.clone(), word.clone());
                Ok(word)
            }
        }
    }

    async fn insert_translation(
        &self,
        translation: Translation,
    ) -> Result<Translation, StoreError> {
        let key = (translation.word.clone(), translation.language.clone());
        let mut translations = self.translations.write().await;
        match translations.get(&key) {
            Some(existing) => {
                tracing::debug!("translation {key:?} already stored, keeping the existing record");
                Ok(existing.clone())
            }
            None => {
                translations.insert(key, translation.clone());
                Ok(translation)
            }
        }
    }

    async fn record_lookup(&self, actor: &str, word: &str) -> Result<(), StoreError> {
        self.events.write().await.push(LookupEvent {
            id: Uuid::new_v4(),
            actor: actor.to_string(),
            word: word.to_string(),
            requested_at: Utc::now(),
        });
        Ok(())
    }

    async fn seed_languages(&self, languages: &[Language]) -> Result<(), StoreError> {
        let mut seeded = self.languages.write().await;
        if !seeded.is_empty() {
            return Ok(());
        }
        seeded.extend_from_slice(languages);
        Ok(())
    }

    async fn language_by_code(&self, code: &str) -> Result<Option<Language>, StoreError> {
        let languages = self.languages.read().await;
        Ok(languages.iter().find(|l| l.code == code).cloned())
    }

    async fn default_language(&self) -> Result<Option<Language>, StoreError> {
        Ok(self.languages.read().await.first().cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::default_languages;

    fn word(name: &str) -> Word {
        Word {
            name: name.to_string(),
            dictionary: None,
            translation_meta: None,
        }
    }

    fn translation(word: &str, language: &str, primary: &str) -> Translation {
        Translation {
            word: word.to_string(),
            language: language.to_string(),
            primary: primary.to_string(),
            candidates: vec![],
        }
    }

    #[tokio::test]
    async fn duplicate_word_insert_returns_the_existing_record() {
        let store = MemoryStore::new();

        let mut first = word("school");
        first.translation_meta = Some(glossa_types::TranslationMeta {
            transcription: Some("skul".to_string()),
            examples: vec![],
            definitions: vec![],
        });

        let stored = store.insert_word(first.clone()).await.unwrap();
        assert_eq!(first, stored);

        // A later insert under the same name must not replace anything.
        let stored = store.insert_word(word("school")).await.unwrap();
        assert_eq!(first, stored);
    }

    #[tokio::test]
    async fn translations_are_unique_per_word_and_language() {
        let store = MemoryStore::new();

        store
            .insert_translation(translation("school", "ru", "школа"))
            .await
            .unwrap();
        let kept = store
            .insert_translation(translation("school", "ru", "other"))
            .await
            .unwrap();
        assert_eq!("школа", kept.primary);

        // A different language is a different cache entry.
        store
            .insert_translation(translation("school", "de", "schule"))
            .await
            .unwrap();
        let german = store.translation("school", "de").await.unwrap();
        assert_eq!("schule", german.unwrap().primary);
    }

    #[tokio::test]
    async fn concurrent_creates_of_one_word_leave_a_single_record() {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert_word(word("leaf")).await.unwrap()
            }));
        }

        for handle in handles {
            let stored = handle.await.unwrap();
            assert_eq!("leaf", stored.name);
        }

        assert_eq!(1, store.words.read().await.len());
    }

    #[tokio::test]
    async fn seeding_twice_keeps_the_first_registry() {
        let store = MemoryStore::new();

        store.seed_languages(&default_languages()).await.unwrap();
        store
            .seed_languages(&[Language {
                code: "xx".to_string(),
                name: "Nowhere".to_string(),
            }])
            .await
            .unwrap();

        assert!(store.language_by_code("xx").await.unwrap().is_none());
        assert_eq!("af", store.default_language().await.unwrap().unwrap().code);
        assert_eq!(
            "Russian",
            store.language_by_code("ru").await.unwrap().unwrap().name
        );
    }

    #[tokio::test]
    async fn usage_log_is_append_only() {
        let store = MemoryStore::new();

        store.record_lookup("learner-1", "school").await.unwrap();
        store.record_lookup("learner-1", "school").await.unwrap();

        assert_eq!(2, store.event_count().await);
    }
}
