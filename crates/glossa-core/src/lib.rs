pub mod error;
pub mod lookup;
pub mod normalize;

pub use error::LookupError;
pub use lookup::{LookupOutcome, LookupService, WordData};
pub use normalize::normalize_word;

#[cfg(test)]
mod tests;
