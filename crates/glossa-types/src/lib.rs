pub mod types;

pub use types::{
    Candidate, DictionaryData, Language, LookupEvent, Sense, SenseDefinition, Translation,
    TranslationMeta, Word,
};
