//! Application state shared across all handlers.

use mw_core::MedWriterConfig;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MedWriterConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: MedWriterConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MedWriterConfig::default())
    }
}
