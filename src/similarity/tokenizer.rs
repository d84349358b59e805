use regex::Regex;
use std::sync::LazyLock;

use super::stopwords::is_stop_word;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("word pattern is valid"));

/// Split text into lowercase word tokens, dropping stop words.
///
/// Documents and queries must go through this exact pipeline so that a query
/// lands in the same vector space the catalog was indexed in. Tokens are
/// runs of two or more word characters; single characters never index.
/// Duplicates are preserved so callers can count term frequency.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|token| !is_stop_word(token))
        .collect()
}
