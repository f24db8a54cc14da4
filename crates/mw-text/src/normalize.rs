//! Text normalization — line endings, whitespace, Unicode cleanup.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_LINE_ENDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());
static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static RE_SPACE_AROUND_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *").unwrap());
static RE_MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static RE_UNICODE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    "[\u{00A0}\u{1680}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}\u{FEFF}]"
).unwrap());
// Supplemental Punctuation block.
static RE_PUNCT_SUPPLEMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    "[\u{2E00}-\u{2E7F}]"
).unwrap());

/// Canonicalize text for hashing, chunking and display statistics.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let result = RE_LINE_ENDING.replace_all(text, "\n");
    let result = result.replace('\t', " ");
    let result = RE_MULTI_SPACE.replace_all(&result, " ");
    let result = RE_SPACE_AROUND_NEWLINE.replace_all(&result, "\n");
    let result = RE_MULTI_NEWLINE.replace_all(&result, "\n\n");
    result.trim().to_string()
}

/// Clean text before it is sent to the grammar checker.
///
/// Unicode spaces become ASCII spaces, supplemental punctuation is dropped,
/// the text is NFKD-decomposed and then passed through [`normalize`].
pub fn clean_for_ai(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let result = RE_UNICODE_SPACE.replace_all(text, " ");
    let result = RE_PUNCT_SUPPLEMENT.replace_all(&result, "");
    let decomposed: String = result.nfkd().collect();
    normalize(&decomposed)
}

/// Cache key for analysis results: hex md5 of the text.
pub fn content_hash(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}
