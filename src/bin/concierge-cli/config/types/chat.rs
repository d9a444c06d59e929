use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::DEFAULT_HISTORY_DISPLAY;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Replaces the built-in waiter persona when set
    pub persona_file: Option<PathBuf>,
    /// Turns shown by `/history` without an argument
    pub history_display: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            persona_file: None,
            history_display: DEFAULT_HISTORY_DISPLAY,
        }
    }
}
