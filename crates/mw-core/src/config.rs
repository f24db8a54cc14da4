use crate::error::{MwError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default soft bound for a chunk sent to the grammar checker, in chars.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MedWriterConfig {
    pub text: TextConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    pub max_chunk_size: usize,
    pub medical_context: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            medical_context: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl Default for MedWriterConfig {
    fn default() -> Self {
        Self {
            text: TextConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl MedWriterConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.text.max_chunk_size == 0 {
            return Err(MwError::InvalidChunkSize(0));
        }
        if self.server.host.trim().is_empty() {
            return Err(MwError::InvalidConfig("server.host must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(MwError::InvalidConfig("server.port must be non-zero".into()));
        }
        Ok(())
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
