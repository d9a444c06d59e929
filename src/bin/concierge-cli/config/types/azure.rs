use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AzureConfig {
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_key: Option<String>,
    pub api_version: Option<String>,
    pub embedding_deployment: Option<String>,
    pub timeout_seconds: Option<u64>,
}
