use grounded_chat::retrieval::QueryType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub index: Option<String>,
    pub semantic_configuration: Option<String>,
    pub query_type: Option<QueryType>,
}
