use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cached lexical entry, keyed by its lowercased name.
///
/// Dictionary data is language-independent, so one `Word` is shared by every
/// translation of it. Either blob can be missing: the dictionary source may
/// have no entry for a word the translation engine knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub name: String,
    pub dictionary: Option<DictionaryData>,
    pub translation_meta: Option<TranslationMeta>,
}

/// Pronunciation and sense data scraped from the dictionary source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryData {
    /// 1 (rare) to 3 (common); absent when the entry carries no marker.
    pub frequency: Option<u8>,
    pub audio_url: Option<String>,
    pub transcription: Option<String>,
    pub senses: Vec<Sense>,
}

/// One definition group of a dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub part_of_speech: String,
    pub definition: String,
    pub examples: Vec<String>,
    pub tags: Vec<String>,
}

/// Language-independent data the translation engine reports about a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationMeta {
    pub transcription: Option<String>,
    pub examples: Vec<String>,
    pub definitions: Vec<SenseDefinition>,
}

/// One flattened definition record from the translation engine.
///
/// Tags attached to the whole word or to the definition group are already
/// merged into `tags`, in that order, ahead of per-definition tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseDefinition {
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
    pub tags: Vec<String>,
    pub synonyms: Vec<String>,
}

/// A cached translation of one word into one target language.
///
/// At most one of these exists per (word, language) pair; this is the cache
/// entry the lookup path checks first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub word: String,
    pub language: String,
    pub primary: String,
    pub candidates: Vec<Candidate>,
}

/// One candidate translation with its frequency ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub part_of_speech: String,
    pub translation: String,
    /// Translations of this candidate back into the source language.
    pub reverse_translations: Vec<String>,
    /// 1 (rare) to 3 (common).
    pub frequency: u8,
}

/// A target language a word can be translated into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Append-only usage record, written once per served lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupEvent {
    pub id: Uuid,
    pub actor: String,
    pub word: String,
    pub requested_at: DateTime<Utc>,
}
