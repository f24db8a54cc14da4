//! Change detection between two text snapshots.
//!
//! This is a common-prefix/common-suffix reduction, not an LCS diff: two
//! separate edits collapse into one span covering both.

use chrono::Utc;
use mw_core::{ChangeKind, TextChange};
use tracing::debug;

/// Compute the single edit turning `old` into `new`.
///
/// Returns an empty vec when the texts are equal, otherwise exactly one
/// change. Offsets are byte offsets on char boundaries.
pub fn detect_changes(old: &str, new: &str) -> Vec<TextChange> {
    if old == new {
        return Vec::new();
    }

    let mut start = 0;
    for (a, b) in old.chars().zip(new.chars()) {
        if a != b {
            break;
        }
        start += a.len_utf8();
    }

    let mut old_end = old.len();
    let mut new_end = new.len();
    for (a, b) in old[start..].chars().rev().zip(new[start..].chars().rev()) {
        if a != b {
            break;
        }
        old_end -= a.len_utf8();
        new_end -= b.len_utf8();
    }

    let kind = if old_end == start {
        ChangeKind::Insert
    } else if new_end == start {
        ChangeKind::Delete
    } else {
        ChangeKind::Replace
    };

    debug!("Detected {:?} at {}..{} (+{} bytes)", kind, start, old_end, new_end - start);

    vec![TextChange {
        kind,
        start,
        end: old_end,
        old_text: old[start..old_end].to_string(),
        new_text: new[start..new_end].to_string(),
        timestamp: Utc::now(),
    }]
}
