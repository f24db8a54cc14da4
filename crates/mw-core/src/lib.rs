pub mod config;
pub mod error;
pub mod types;

pub use config::{MedWriterConfig, ServerConfig, TextConfig};
pub use error::{MwError, Result};
pub use types::{
    ChangeKind, NodeType, PlainTextResult, PositionEntry, TextChange, TextChunk, TextStatistics,
};
