use serde::{Deserialize, Serialize};

use super::{AzureConfig, ChatConfig, LoggingConfig, SearchConfig};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub azure: AzureConfig,
    pub search: SearchConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
