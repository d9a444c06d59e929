use secrecy::ExposeSecret;
use serde::Serialize;

use crate::chat::Turn;
use crate::retrieval::{QueryType, RetrievalConfig, SamplingParams};

/// Request payload for the Azure OpenAI chat completions endpoint with an
/// attached search data source.
///
/// Holds borrowed credentials, so it deliberately has no `Debug` impl.
#[derive(Serialize)]
pub(super) struct AzureChatRequest<'a> {
    pub(super) messages: &'a [Turn],
    pub(super) max_tokens: u32,
    pub(super) temperature: f32,
    pub(super) top_p: f32,
    pub(super) frequency_penalty: f32,
    pub(super) presence_penalty: f32,
    pub(super) data_sources: Vec<DataSource<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", content = "parameters", rename_all = "snake_case")]
pub(super) enum DataSource<'a> {
    AzureSearch(AzureSearchParameters<'a>),
}

#[derive(Serialize)]
pub(super) struct AzureSearchParameters<'a> {
    endpoint: &'a str,
    index_name: &'a str,
    semantic_configuration: &'a str,
    authentication: Authentication<'a>,
    embedding_dependency: EmbeddingDependency<'a>,
    query_type: QueryType,
    top_n_documents: u32,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Authentication<'a> {
    ApiKey { key: &'a str },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum EmbeddingDependency<'a> {
    Endpoint {
        endpoint: &'a str,
        authentication: Authentication<'a>,
    },
}

pub(super) fn build_chat_request<'a>(
    turns: &'a [Turn],
    retrieval: &'a RetrievalConfig,
    sampling: SamplingParams,
) -> AzureChatRequest<'a> {
    let search = AzureSearchParameters {
        endpoint: &retrieval.search_endpoint,
        index_name: &retrieval.index_name,
        semantic_configuration: &retrieval.semantic_configuration,
        authentication: Authentication::ApiKey {
            key: retrieval.search_key.expose_secret(),
        },
        embedding_dependency: EmbeddingDependency::Endpoint {
            endpoint: &retrieval.embedding_endpoint,
            authentication: Authentication::ApiKey {
                key: retrieval.embedding_key.expose_secret(),
            },
        },
        query_type: retrieval.query_type,
        top_n_documents: retrieval.top_n_documents,
    };

    AzureChatRequest {
        messages: turns,
        max_tokens: sampling.max_tokens,
        temperature: sampling.temperature,
        top_p: sampling.top_p,
        frequency_penalty: sampling.frequency_penalty,
        presence_penalty: sampling.presence_penalty,
        data_sources: vec![DataSource::AzureSearch(search)],
    }
}
