//! Value types produced by the text pipeline.
//!
//! All offsets are byte offsets into UTF-8 text and always fall on char
//! boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Kind of content-tree node a position entry was recorded for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Text,
    Element,
}

/// Anchors a visited tree node to an offset in the extracted plain text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PositionEntry {
    pub dom_offset: usize,
    pub text_offset: usize,
    pub node_index: usize,
    pub node_type: NodeType,
}

/// Plain text extracted from a content tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlainTextResult {
    pub plain_text: String,
    pub position_map: Vec<PositionEntry>,
    pub word_count: usize,
    pub character_count: usize,
    pub has_changes: bool,
}

impl PlainTextResult {
    /// Translate a structural offset into an offset in `plain_text`.
    ///
    /// Uses the last entry anchored at or before `dom_offset` and clamps the
    /// result to the text length.
    pub fn text_offset_for(&self, dom_offset: usize) -> usize {
        let idx = self
            .position_map
            .partition_point(|e| e.dom_offset <= dom_offset);
        let mapped = match idx.checked_sub(1).map(|i| &self.position_map[i]) {
            Some(entry) => entry.text_offset + (dom_offset - entry.dom_offset),
            None => dom_offset,
        };
        mapped.min(self.plain_text.len())
    }

    /// Position entry recorded for the `node_index`-th visited node.
    pub fn entry_for_node(&self, node_index: usize) -> Option<&PositionEntry> {
        self.position_map.iter().find(|e| e.node_index == node_index)
    }
}

/// Sentence-aligned slice of text submitted for analysis on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextChunk {
    pub id: String,
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub sentence_count: usize,
    pub is_complete: bool,
}

impl TextChunk {
    pub fn range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Delete,
    Replace,
}

/// Single contiguous edit between two text snapshots.
///
/// `start..end` is the replaced range in the old text; `new_text` occupies
/// `start..start + new_text.len()` in the new text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub start: usize,
    pub end: usize,
    pub old_text: String,
    pub new_text: String,
    pub timestamp: DateTime<Utc>,
}

impl TextChange {
    /// Replay the change on `old`. Returns `None` if `old` is not the text
    /// the change was computed from.
    pub fn apply(&self, old: &str) -> Option<String> {
        if old.get(self.start..self.end)? != self.old_text {
            return None;
        }
        let mut out = String::with_capacity(old.len() - self.old_text.len() + self.new_text.len());
        out.push_str(&old[..self.start]);
        out.push_str(&self.new_text);
        out.push_str(&old[self.end..]);
        Some(out)
    }

    /// Signed length difference introduced by the change.
    pub fn delta(&self) -> isize {
        self.new_text.len() as isize - self.old_text.len() as isize
    }

    /// Move an offset in the old text to the new text.
    ///
    /// Offsets strictly inside the replaced region have no counterpart and
    /// yield `None`. An offset at an insertion point moves past the insert.
    pub fn map_offset(&self, offset: usize) -> Option<usize> {
        if offset < self.start || (offset == self.start && self.start != self.end) {
            Some(offset)
        } else if offset >= self.end {
            Some(offset - self.end + self.start + self.new_text.len())
        } else {
            None
        }
    }

    /// Move a `[start, end)` span in the old text to the new text.
    ///
    /// Spans ending at or before the edit are untouched, spans starting at or
    /// after it shift by [`delta`](Self::delta). Spans the edit touches yield
    /// `None`.
    pub fn map_span(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        if end <= self.start {
            return Some((start, end));
        }
        if start >= self.end {
            let shift = |o: usize| o - self.end + self.start + self.new_text.len();
            return Some((shift(start), shift(end)));
        }
        None
    }
}

/// Word, sentence, paragraph and character counts for a text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub character_count: usize,
}
