use secrecy::SecretString;

use crate::retrieval::QueryType;

use super::grounded_builder::GroundedChatBuilder;

impl GroundedChatBuilder {
    /// Set the Azure AI Search endpoint.
    pub fn search_endpoint(mut self, url: impl Into<String>) -> Self {
        self.state.search_endpoint = Some(url.into());
        self
    }

    /// Set the Azure AI Search API key.
    pub fn search_key(mut self, key: impl Into<String>) -> Self {
        self.state.search_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the index to ground answers on.
    pub fn index_name(mut self, index: impl Into<String>) -> Self {
        self.state.index_name = Some(index.into());
        self
    }

    /// Set the semantic ranking configuration name.
    pub fn semantic_configuration(mut self, name: impl Into<String>) -> Self {
        self.state.semantic_configuration = Some(name.into());
        self
    }

    /// Set the hybrid query mode.
    pub fn query_type(mut self, query_type: QueryType) -> Self {
        self.state.query_type = Some(query_type);
        self
    }
}
