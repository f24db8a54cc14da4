//! Sentence chunker — packs whole sentences into size-bounded chunks.

use chrono::Utc;
use mw_core::config::DEFAULT_MAX_CHUNK_SIZE;
use mw_core::TextChunk;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Abbreviations ("Dr.", "mg.") and decimals followed by whitespace count as
// boundaries too.
static RE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s+").unwrap());

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A sentence located in its source text.
///
/// `text` is trimmed; `start..end` covers the untrimmed span including the
/// whitespace that closed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split text at runs of `.`, `!` or `?` followed by whitespace.
///
/// Text after the last boundary becomes a final sentence even without a
/// terminator. Whitespace-only spans are skipped.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut push = |start: usize, end: usize| {
        let s = text[start..end].trim();
        if !s.is_empty() {
            sentences.push(Sentence { text: s, start, end });
        }
    };

    let mut last = 0;
    for m in RE_SENTENCE_END.find_iter(text) {
        push(last, m.end());
        last = m.end();
    }
    if last < text.len() {
        push(last, text.len());
    }
    sentences
}

/// Packs sentences greedily into chunks of at most `max_chunk_size` chars.
///
/// The bound is soft: a sentence longer than the limit is emitted whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceChunker {
    pub max_chunk_size: usize,
}

impl SentenceChunker {
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    pub fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        let generation = Utc::now().timestamp_millis();
        let mut chunks = Vec::new();
        let mut emit = |buf: &str, sentence_count: usize, start: usize, end: usize| {
            chunks.push(TextChunk {
                id: format!("chunk-{}-{}", generation, chunks.len()),
                text: buf.to_string(),
                start_offset: start,
                end_offset: end,
                sentence_count,
                is_complete: true,
            });
        };

        let mut buf = String::new();
        let mut buf_chars = 0;
        let mut buf_start = 0;
        let mut buf_sentences = 0;
        let mut prev_end = 0;

        for sentence in &sentences {
            let sentence_chars = sentence.text.chars().count();
            let merged_chars = if buf.is_empty() {
                sentence_chars
            } else {
                buf_chars + 1 + sentence_chars
            };

            if !buf.is_empty() && merged_chars > self.max_chunk_size {
                emit(&buf, buf_sentences, buf_start, prev_end);
                buf.clear();
                buf.push_str(sentence.text);
                buf_chars = sentence_chars;
                buf_start = sentence.start;
                buf_sentences = 1;
            } else {
                if buf.is_empty() {
                    buf_start = sentence.start;
                } else {
                    buf.push(' ');
                }
                buf.push_str(sentence.text);
                buf_chars = merged_chars;
                buf_sentences += 1;
            }
            prev_end = sentence.end;
        }
        if !buf.is_empty() {
            emit(&buf, buf_sentences, buf_start, text.len());
        }

        debug!(
            "Chunked {} sentences into {} chunks (max {} chars)",
            sentences.len(),
            chunks.len(),
            self.max_chunk_size
        );
        chunks
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_SIZE)
    }
}

/// Chunk `text` with the given size bound.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<TextChunk> {
    SentenceChunker::new(max_chunk_size).chunk(text)
}

/// Whether the trimmed text ends in `.`, `!` or `?`.
pub fn ends_with_complete_sentence(text: &str) -> bool {
    text.trim_end().ends_with(TERMINATORS)
}

/// Trailing fragment still being typed, if the text does not end a sentence.
pub fn last_incomplete_sentence(text: &str) -> Option<&str> {
    if text.trim().is_empty() || ends_with_complete_sentence(text) {
        return None;
    }
    let tail_start = RE_SENTENCE_END
        .find_iter(text)
        .last()
        .map(|m| m.end())
        .unwrap_or(0);
    Some(text[tail_start..].trim())
}
