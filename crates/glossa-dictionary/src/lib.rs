pub mod client;
pub mod entry;

pub use client::{DictionaryClient, DictionaryError, DictionaryProvider};
pub use entry::parse_entry_markup;
