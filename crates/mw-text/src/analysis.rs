//! Grammar analysis over sentence chunks.
//!
//! The checker itself (a language-model call) lives outside this crate and
//! is plugged in through [`GrammarChecker`]. This module chunks the text,
//! calls the checker once per chunk, moves the returned spans back onto the
//! source text and caches results by content hash.

use crate::chunker::{split_sentences, SentenceChunker};
use crate::normalize::content_hash;
use async_trait::async_trait;
use mw_core::{MwError, Result, TextChange, TextChunk, TextConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Grammar,
    Spelling,
    Style,
    Punctuation,
    Medical,
}

/// A flagged span with a suggested replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GrammarIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GrammarRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_context: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrammarResponse {
    #[serde(default)]
    pub errors: Vec<GrammarIssue>,
}

/// External error-detection service. Offsets in the response are relative
/// to `request.text`.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, request: &GrammarRequest) -> anyhow::Result<GrammarResponse>;
}

/// In-memory analysis results keyed by [`Analyzer::cache_key`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    inner: Arc<RwLock<HashMap<String, Vec<GrammarIssue>>>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<GrammarIssue>>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<GrammarIssue>>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<Vec<GrammarIssue>> {
        self.read().get(key).cloned()
    }

    pub fn insert(&self, key: impl Into<String>, issues: Vec<GrammarIssue>) {
        self.write().insert(key.into(), issues);
    }

    pub fn remove(&self, key: &str) -> Option<Vec<GrammarIssue>> {
        self.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }
}

/// A sentence's position in the joined chunk text and in the source.
struct Segment {
    chunk_offset: usize,
    source_offset: usize,
    len: usize,
}

/// Chunk text joins trimmed sentences with single spaces, so chunk-local
/// offsets are mapped sentence by sentence.
fn chunk_segments(source: &str, chunk: &TextChunk) -> Vec<Segment> {
    let slice = &source[chunk.range()];
    let mut chunk_offset = 0;
    split_sentences(slice)
        .into_iter()
        .map(|s| {
            let lead = slice[s.start..s.end].len() - slice[s.start..s.end].trim_start().len();
            let seg = Segment {
                chunk_offset,
                source_offset: chunk.start_offset + s.start + lead,
                len: s.text.len(),
            };
            chunk_offset += s.text.len() + 1;
            seg
        })
        .collect()
}

fn map_chunk_offset(segments: &[Segment], offset: usize) -> Option<usize> {
    let seg = segments.iter().rev().find(|s| s.chunk_offset <= offset)?;
    let within = offset - seg.chunk_offset;
    (within <= seg.len).then_some(seg.source_offset + within)
}

/// Chunk text joins sentences with one space where the source may have
/// newlines or runs of spaces.
fn same_words(a: &str, b: &str) -> bool {
    a.split_whitespace().eq(b.split_whitespace())
}

/// Move a chunk-local issue onto the source text.
///
/// Falls back to searching the chunk's source range for the flagged text
/// when the reported offsets do not line up with it. The placed issue's
/// `text` is the source slice it covers.
fn place_issue(source: &str, chunk: &TextChunk, segments: &[Segment], issue: GrammarIssue) -> Option<GrammarIssue> {
    let mapped = map_chunk_offset(segments, issue.start)
        .zip(map_chunk_offset(segments, issue.end))
        .filter(|(s, e)| {
            s <= e && source.get(*s..*e).is_some_and(|slice| same_words(slice, &issue.text))
        });

    let (start, end) = match mapped {
        Some(span) => span,
        None if !issue.text.is_empty() => {
            let found = source[chunk.range()].find(&issue.text)?;
            let start = chunk.start_offset + found;
            (start, start + issue.text.len())
        }
        None => return None,
    };
    Some(GrammarIssue { start, end, text: source[start..end].to_string(), ..issue })
}

/// Runs the grammar checker chunk by chunk with caching.
#[derive(Clone)]
pub struct Analyzer {
    checker: Arc<dyn GrammarChecker>,
    cache: AnalysisCache,
    chunker: SentenceChunker,
    medical_context: bool,
}

impl Analyzer {
    pub fn new(checker: Arc<dyn GrammarChecker>, config: &TextConfig) -> Self {
        Self {
            checker,
            cache: AnalysisCache::new(),
            chunker: SentenceChunker::new(config.max_chunk_size),
            medical_context: config.medical_context,
        }
    }

    pub fn with_cache(mut self, cache: AnalysisCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// Cache key for `text` under this analyzer's chunk size and context
    /// flag, so analyzers sharing a cache never see each other's results.
    pub fn cache_key(&self, text: &str) -> String {
        format!(
            "{}:{}:{}",
            content_hash(text),
            self.chunker.max_chunk_size,
            self.medical_context
        )
    }

    /// Analyze `text`, returning issues anchored at byte offsets in `text`.
    ///
    /// Callers pass the plain text shown to the user (extracted and
    /// normalized). Chunks are checked in order; the first checker failure
    /// aborts the analysis and nothing is cached.
    pub async fn analyze(&self, text: &str) -> Result<Vec<GrammarIssue>> {
        let key = self.cache_key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!("Analysis cache hit for {}", key);
            return Ok(hit);
        }

        let mut issues = Vec::new();
        for chunk in self.chunker.chunk(text) {
            let request = GrammarRequest {
                text: chunk.text.clone(),
                medical_context: Some(self.medical_context),
            };
            let response = self.checker.check(&request).await.map_err(|e| {
                warn!("Grammar check failed for {}: {}", chunk.id, e);
                MwError::Analysis(e.to_string())
            })?;

            let segments = chunk_segments(text, &chunk);
            let reported = response.errors.len();
            let placed: Vec<GrammarIssue> = response
                .errors
                .into_iter()
                .filter_map(|issue| place_issue(text, &chunk, &segments, issue))
                .collect();
            if placed.len() < reported {
                warn!("Dropped {} unplaceable issues from {}", reported - placed.len(), chunk.id);
            }
            issues.extend(placed);
        }

        issues.sort_by_key(|i| (i.start, i.end));
        self.cache.insert(key, issues.clone());
        Ok(issues)
    }
}

/// Keep issues an edit did not touch, with spans moved onto the new text.
pub fn reanchor_issues(issues: &[GrammarIssue], change: &TextChange) -> Vec<GrammarIssue> {
    issues
        .iter()
        .filter_map(|issue| {
            let (start, end) = change.map_span(issue.start, issue.end)?;
            Some(GrammarIssue { start, end, ..issue.clone() })
        })
        .collect()
}
