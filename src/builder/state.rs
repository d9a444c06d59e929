use secrecy::SecretString;

use crate::retrieval::QueryType;

#[derive(Default)]
pub(crate) struct BuilderState {
    pub(crate) endpoint: Option<String>,
    pub(crate) api_key: Option<SecretString>,
    pub(crate) deployment_id: Option<String>,
    pub(crate) api_version: Option<String>,
    pub(crate) embedding_deployment: Option<String>,
    pub(crate) timeout_seconds: Option<u64>,
    pub(crate) search_endpoint: Option<String>,
    pub(crate) search_key: Option<SecretString>,
    pub(crate) index_name: Option<String>,
    pub(crate) semantic_configuration: Option<String>,
    pub(crate) query_type: Option<QueryType>,
}

impl BuilderState {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
