//! Content tree → plain text with a position map.

use crate::node::ContentNode;
use crate::stats::count_words;
use mw_core::{NodeType, PlainTextResult, PositionEntry};
use tracing::debug;

struct Walker {
    text: String,
    entries: Vec<PositionEntry>,
    next_index: usize,
}

impl Walker {
    fn record(&mut self, node_type: NodeType) {
        let offset = self.text.len();
        self.entries.push(PositionEntry {
            dom_offset: offset,
            text_offset: offset,
            node_index: self.next_index,
            node_type,
        });
        self.next_index += 1;
    }

    fn visit<N: ContentNode>(&mut self, node: &N) {
        if let Some(content) = node.text() {
            self.record(NodeType::Text);
            self.text.push_str(content);
            return;
        }

        let block = node.is_block();
        if block && !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.record(NodeType::Element);
        for child in node.children() {
            self.visit(child);
        }
        if block && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }
}

/// Walk `root` depth-first and flatten it into plain text.
///
/// Block elements are separated by a single newline. The result is trimmed
/// and position entries are rebased onto the trimmed text.
pub fn extract<N: ContentNode>(root: &N) -> PlainTextResult {
    let mut walker = Walker {
        text: String::new(),
        entries: Vec::new(),
        next_index: 0,
    };
    walker.visit(root);

    let raw = walker.text;
    let trimmed = raw.trim();
    let lead = raw.len() - raw.trim_start().len();
    let len = trimmed.len();
    let position_map = walker
        .entries
        .into_iter()
        .map(|mut e| {
            e.dom_offset = e.dom_offset.saturating_sub(lead).min(len);
            e.text_offset = e.text_offset.saturating_sub(lead).min(len);
            e
        })
        .collect::<Vec<_>>();

    debug!(
        "Extracted {} bytes from {} nodes",
        len,
        position_map.len()
    );

    PlainTextResult {
        plain_text: trimmed.to_string(),
        word_count: count_words(trimmed),
        character_count: trimmed.chars().count(),
        position_map,
        has_changes: true,
    }
}
