use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

use crate::backends::azure_openai::{AzureOpenAI, AzureOpenAIConfig};
use crate::error::ChatError;
use crate::retrieval::{RetrievalConfig, SamplingParams, TOP_N_DOCUMENTS};

use super::grounded_builder::GroundedChatBuilder;
use super::state::BuilderState;

const DEFAULT_API_VERSION: &str = "2024-05-01-preview";
const DEFAULT_EMBEDDING_DEPLOYMENT: &str = "text-embedding-ada-002";
const EMBEDDING_API_VERSION: &str = "2023-07-01-preview";
const DEFAULT_INDEX_NAME: &str = "try1ragnlp";
const DEFAULT_SEMANTIC_CONFIGURATION: &str = "azureml-default";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

impl GroundedChatBuilder {
    /// Validate the configuration and build the client.
    ///
    /// Fails with [`ChatError::ConfigurationMissing`] naming the first
    /// absent (or blank) required value.
    pub fn build(self) -> Result<AzureOpenAI, ChatError> {
        self.state.build()
    }
}

impl BuilderState {
    fn build(mut self) -> Result<AzureOpenAI, ChatError> {
        log_builder_state(&self);

        let endpoint = require(self.endpoint.take(), "endpoint")?;
        let api_key = require_secret(self.api_key.take(), "api_key")?;
        let deployment_id = require(self.deployment_id.take(), "deployment_id")?;
        let search_endpoint = require(self.search_endpoint.take(), "search_endpoint")?;
        let search_key = require_secret(self.search_key.take(), "search_key")?;

        validate_url(&endpoint, "endpoint")?;
        validate_url(&search_endpoint, "search_endpoint")?;

        let embedding_deployment = self
            .embedding_deployment
            .take()
            .unwrap_or_else(|| DEFAULT_EMBEDDING_DEPLOYMENT.to_string());
        let embedding_endpoint = format!(
            "{}/openai/deployments/{embedding_deployment}/embeddings?api-version={EMBEDDING_API_VERSION}",
            endpoint.trim_end_matches('/')
        );

        let retrieval = RetrievalConfig {
            search_endpoint,
            index_name: self
                .index_name
                .take()
                .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string()),
            semantic_configuration: self
                .semantic_configuration
                .take()
                .unwrap_or_else(|| DEFAULT_SEMANTIC_CONFIGURATION.to_string()),
            query_type: self.query_type.unwrap_or_default(),
            top_n_documents: TOP_N_DOCUMENTS,
            search_key,
            embedding_endpoint,
            embedding_key: api_key.clone(),
        };

        AzureOpenAI::new(AzureOpenAIConfig {
            api_key,
            endpoint,
            deployment_id,
            api_version: self
                .api_version
                .take()
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            retrieval,
            sampling: SamplingParams::default(),
            timeout_seconds: Some(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)),
        })
    }
}

fn log_builder_state(state: &BuilderState) {
    log::debug!(
        "Building grounded chat client. deployment={:?} index={:?} query_type={:?} timeout={:?}",
        state.deployment_id,
        state.index_name,
        state.query_type,
        state.timeout_seconds,
    );
}

fn require(value: Option<String>, field: &'static str) -> Result<String, ChatError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ChatError::ConfigurationMissing(field)),
    }
}

fn require_secret(
    value: Option<SecretString>,
    field: &'static str,
) -> Result<SecretString, ChatError> {
    match value {
        Some(v) if !v.expose_secret().trim().is_empty() => Ok(v),
        _ => Err(ChatError::ConfigurationMissing(field)),
    }
}

fn validate_url(raw: &str, field: &str) -> Result<(), ChatError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| ChatError::InvalidConfig(format!("{field} `{raw}` is not a valid URL: {e}")))
}
