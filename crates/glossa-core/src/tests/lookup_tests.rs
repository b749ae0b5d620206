use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use glossa_dictionary::DictionaryProvider;
use glossa_store::{MemoryStore, WordStore, default_languages};
use glossa_translate::{LanguageCode, TranslateError, TranslationData, Translator};
use glossa_types::{Candidate, DictionaryData};

use crate::error::LookupError;
use crate::lookup::{LookupOutcome, LookupService};
use crate::normalize::normalize_word;

struct StubTranslator {
    known: bool,
    fail: bool,
    calls: AtomicUsize,
}

impl StubTranslator {
    fn knowing_the_word() -> Self {
        Self {
            known: true,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn knowing_nothing() -> Self {
        Self {
            known: false,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn unreachable_engine() -> Self {
        Self {
            known: false,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Translator for StubTranslator {
    async fn lookup(
        &self,
        _word: &str,
        _to: LanguageCode,
    ) -> Result<Option<TranslationData>, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(TranslateError::ApiError("engine is down".to_string()));
        }
        if !self.known {
            return Ok(None);
        }

        Ok(Some(TranslationData {
            transcription: Some("skul".to_string()),
            primary: "школа".to_string(),
            definitions: vec![],
            examples: vec![],
            candidates: vec![Candidate {
                part_of_speech: "noun".to_string(),
                translation: "школа".to_string(),
                reverse_translations: vec!["school".to_string()],
                frequency: 3,
            }],
        }))
    }
}

#[derive(Default)]
struct StubDictionary {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl DictionaryProvider for StubDictionary {
    async fn entry(&self, _word: &str) -> Option<DictionaryData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(DictionaryData {
            frequency: Some(3),
            audio_url: None,
            transcription: Some("skul".to_string()),
            senses: vec![],
        })
    }
}

async fn service(
    translator: StubTranslator,
) -> (
    LookupService,
    Arc<MemoryStore>,
    Arc<StubTranslator>,
    Arc<StubDictionary>,
) {
    let store = Arc::new(MemoryStore::new());
    store.seed_languages(&default_languages()).await.unwrap();

    let translator = Arc::new(translator);
    let dictionary = Arc::new(StubDictionary::default());

    let service = LookupService::new(
        Arc::clone(&store) as Arc<dyn WordStore>,
        Arc::clone(&translator) as Arc<dyn Translator>,
        Arc::clone(&dictionary) as Arc<dyn DictionaryProvider>,
    );

    (service, store, translator, dictionary)
}

fn found(outcome: LookupOutcome) -> crate::lookup::WordData {
    match outcome {
        LookupOutcome::Found(data) => data,
        LookupOutcome::NotFound => panic!("expected a served lookup"),
    }
}

#[tokio::test]
async fn first_lookup_fetches_and_persists() {
    let (service, store, translator, dictionary) = service(StubTranslator::knowing_the_word()).await;

    let data = found(service.lookup_word("School", "ru", "learner-1").await.unwrap());

    assert_eq!("school", data.word);
    assert_eq!(1, data.translations.len());
    assert_eq!("школа", data.translations[0].translation);
    assert!(data.google.is_some());
    assert!(data.collins.is_some());

    assert_eq!(1, translator.calls.load(Ordering::SeqCst));
    assert_eq!(1, dictionary.calls.load(Ordering::SeqCst));
    assert_eq!(1, store.event_count().await);
    assert!(store.translation("school", "ru").await.unwrap().is_some());
}

#[tokio::test]
async fn cache_hit_makes_no_network_calls() {
    let (service, store, translator, dictionary) = service(StubTranslator::knowing_the_word()).await;

    service.lookup_word("school", "ru", "learner-1").await.unwrap();
    let data = found(service.lookup_word("school", "ru", "learner-2").await.unwrap());

    assert_eq!("school", data.word);
    assert_eq!(1, translator.calls.load(Ordering::SeqCst));
    assert_eq!(1, dictionary.calls.load(Ordering::SeqCst));

    // Every served lookup appends a usage record, hit or miss.
    assert_eq!(2, store.event_count().await);
}

#[tokio::test]
async fn dictionary_is_fetched_once_per_word_across_languages() {
    let (service, _store, translator, dictionary) = service(StubTranslator::knowing_the_word()).await;

    service.lookup_word("school", "ru", "learner-1").await.unwrap();
    let data = found(service.lookup_word("school", "de", "learner-1").await.unwrap());

    // A new language is a cache miss for the translation, but the word
    // record already exists, so dictionary data is not fetched again.
    assert_eq!(2, translator.calls.load(Ordering::SeqCst));
    assert_eq!(1, dictionary.calls.load(Ordering::SeqCst));
    assert!(data.collins.is_some());
}

#[tokio::test]
async fn unknown_word_is_reported_without_persisting_anything() {
    let (service, store, _translator, dictionary) = service(StubTranslator::knowing_nothing()).await;

    let outcome = service.lookup_word("qqqqq", "ru", "learner-1").await.unwrap();

    assert!(matches!(outcome, LookupOutcome::NotFound));
    assert_eq!(0, dictionary.calls.load(Ordering::SeqCst));
    assert_eq!(0, store.event_count().await);
    assert!(store.word_by_name("qqqqq").await.unwrap().is_none());
}

#[tokio::test]
async fn unreachable_engine_is_an_error_not_a_miss() {
    let (service, store, _translator, _dictionary) =
        service(StubTranslator::unreachable_engine()).await;

    let result = service.lookup_word("school", "ru", "learner-1").await;

    assert!(matches!(result, Err(LookupError::SourceUnavailable(_))));
    assert_eq!(0, store.event_count().await);
}

#[tokio::test]
async fn unknown_language_code_falls_back_to_the_default() {
    let (service, store, _translator, _dictionary) =
        service(StubTranslator::knowing_the_word()).await;

    found(service.lookup_word("school", "xx", "learner-1").await.unwrap());

    // "af" is the first seeded language and therefore the fallback.
    assert!(store.translation("school", "af").await.unwrap().is_some());
}

#[tokio::test]
async fn lookup_keys_are_case_insensitive() {
    let (service, _store, translator, _dictionary) =
        service(StubTranslator::knowing_the_word()).await;

    service.lookup_word("  SCHOOL ", "ru", "learner-1").await.unwrap();
    let data = found(service.lookup_word("School", "ru", "learner-1").await.unwrap());

    assert_eq!("school", data.word);
    assert_eq!(1, translator.calls.load(Ordering::SeqCst));
}

#[test]
fn normalization_trims_lowercases_and_folds_width() {
    assert_eq!("school", normalize_word("  School  "));
    // NFKC folds full-width letters into their ASCII forms.
    assert_eq!("school", normalize_word("ｓｃｈｏｏｌ"));
}
