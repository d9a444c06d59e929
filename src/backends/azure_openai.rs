//! Azure OpenAI chat completions grounded on an Azure AI Search index.
//!
//! Each call sends the whole conversation together with an `azure_search`
//! data source; the service retrieves matching documents, vectorizing the
//! query through the configured embedding deployment, and answers from them.

mod request;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::chat::{GroundedChatProvider, Turn};
use crate::error::{ChatError, CompletionResult};
use crate::retrieval::{RetrievalConfig, SamplingParams};

use request::build_chat_request;
use response::{classify_error, retry_after, AzureChatResponse};

/// Configuration for the Azure OpenAI client.
#[derive(Debug)]
pub struct AzureOpenAIConfig {
    /// Subscription key sent in the `api-key` header.
    pub api_key: SecretString,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub deployment_id: String,
    pub api_version: String,
    pub retrieval: RetrievalConfig,
    pub sampling: SamplingParams,
    /// Transport timeout; `None` leaves reqwest's default (no timeout).
    pub timeout_seconds: Option<u64>,
}

/// Client for grounded Azure OpenAI chat completions.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct AzureOpenAI {
    pub config: Arc<AzureOpenAIConfig>,
    pub client: Client,
}

impl AzureOpenAI {
    pub fn new(config: AzureOpenAIConfig) -> Result<Self, ChatError> {
        let mut builder = Client::builder();
        if let Some(sec) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        let client = builder
            .build()
            .map_err(|e| ChatError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_client(client: Client, config: AzureOpenAIConfig) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn retrieval(&self) -> &RetrievalConfig {
        &self.config.retrieval
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment_id
        )
    }

    async fn send(&self, turns: &[Turn]) -> CompletionResult {
        let retrieval = &self.config.retrieval;
        let body = build_chat_request(turns, retrieval, self.config.sampling);

        log::debug!(
            "Azure OpenAI grounded request: deployment={} turns={} index={} query_type={:?} top_n={}",
            self.config.deployment_id,
            turns.len(),
            retrieval.index_name,
            retrieval.query_type,
            retrieval.top_n_documents,
        );

        let resp = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        log::debug!("Azure OpenAI HTTP status: {status}");

        if !status.is_success() {
            let wait = retry_after(resp.headers());
            let error_text = resp.text().await.unwrap_or_default();
            return Err(classify_error(status, wait, &error_text));
        }

        let resp_text = resp.text().await?;
        let parsed: AzureChatResponse = serde_json::from_str(&resp_text)?;
        parsed.into_text()
    }
}

#[async_trait]
impl GroundedChatProvider for AzureOpenAI {
    async fn complete(&self, turns: &[Turn]) -> CompletionResult {
        let result = self.send(turns).await;
        if let Err(err) = &result {
            log::warn!("Azure OpenAI completion failed ({:?}): {err}", err.kind());
        }
        result
    }
}
