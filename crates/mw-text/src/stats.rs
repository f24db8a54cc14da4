//! Word, sentence and paragraph counting.

use mw_core::TextStatistics;
use regex::Regex;
use std::sync::LazyLock;

static RE_SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static RE_PARAGRAPH_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Whitespace-delimited, non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_sentences(text: &str) -> usize {
    RE_SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn count_paragraphs(text: &str) -> usize {
    RE_PARAGRAPH_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn text_statistics(text: &str) -> TextStatistics {
    TextStatistics {
        word_count: count_words(text),
        sentence_count: count_sentences(text),
        paragraph_count: count_paragraphs(text),
        character_count: text.chars().count(),
    }
}
