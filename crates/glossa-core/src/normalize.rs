use unicode_normalization::UnicodeNormalization;

/// Word identity is case-insensitive: keys are trimmed, NFKC-normalized,
/// and lowercased before any comparison or storage.
pub fn normalize_word(word: &str) -> String {
    word.trim().nfkc().collect::<String>().to_lowercase()
}
