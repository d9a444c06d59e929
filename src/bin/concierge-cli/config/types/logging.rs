use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{DEFAULT_LOG_ROTATE_KEEP, DEFAULT_LOG_ROTATE_SIZE};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// flexi_logger spec, e.g. `info` or `grounded_chat=debug`; `RUST_LOG` wins
    pub level: String,
    /// Log file location; its directory replaces the default logs directory
    pub path: Option<PathBuf>,
    /// Rotate once the file reaches this many bytes
    pub rotate_size: u64,
    /// Rotated files kept on disk
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}
