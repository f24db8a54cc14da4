use thiserror::Error;

#[derive(Error, Debug)]
pub enum MwError {
    #[error("Malformed content tree: {0}")]
    MalformedTree(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),
    #[error("Analysis error: {0}")]
    Analysis(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MwError {
    /// Whether the error was caused by bad caller input rather than an internal fault.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MwError::MalformedTree(_)
                | MwError::InvalidChunkSize(_)
                | MwError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MwError>;
