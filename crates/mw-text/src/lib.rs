//! Text pipeline for Med Writer.
//!
//! Stages:
//! 1. Extract — content tree → plain text + position map
//! 2. Normalize — line endings, whitespace, Unicode cleanup
//! 3. Chunk — sentence-aligned chunks for the grammar checker
//! 4. Detect changes — single-span diff for re-anchoring annotations
//!
//! Every stage is a pure function; [`analysis`] wires the chunker to an
//! external grammar checker.

pub mod analysis;
pub mod change;
pub mod chunker;
pub mod extract;
pub mod node;
pub mod normalize;
pub mod stats;

pub use analysis::{
    reanchor_issues, AnalysisCache, Analyzer, GrammarChecker, GrammarIssue, GrammarRequest,
    GrammarResponse, IssueKind,
};
pub use change::detect_changes;
pub use chunker::{
    chunk_text, ends_with_complete_sentence, last_incomplete_sentence, split_sentences, Sentence,
    SentenceChunker,
};
pub use extract::extract;
pub use node::{ContentNode, Node};
pub use normalize::{clean_for_ai, content_hash, normalize};
pub use stats::text_statistics;
