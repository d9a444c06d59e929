//! Static grounding configuration attached to every completion request.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Number of documents the search service returns per query.
pub const TOP_N_DOCUMENTS: u32 = 5;

/// How the search service combines keyword and vector matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Simple,
    Semantic,
    Vector,
    #[default]
    VectorSimpleHybrid,
    VectorSemanticHybrid,
}

/// Which index to query, how, and with which credentials.
///
/// Built once by [`GroundedChatBuilder`](crate::builder::GroundedChatBuilder)
/// and owned by the client for its whole lifetime.
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    pub search_endpoint: String,
    pub index_name: String,
    pub semantic_configuration: String,
    pub query_type: QueryType,
    pub top_n_documents: u32,
    pub search_key: SecretString,
    /// Endpoint used to vectorize the query before the hybrid search.
    pub embedding_endpoint: String,
    pub embedding_key: SecretString,
}

/// Fixed sampling parameters sent with each completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_tokens: 800,
            temperature: 0.7,
            top_p: 0.95,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}
