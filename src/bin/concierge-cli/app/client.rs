use std::fs;

use anyhow::Context;
use grounded_chat::backends::azure_openai::AzureOpenAI;
use grounded_chat::builder::GroundedChatBuilder;
use grounded_chat::engine::DEFAULT_PERSONA;

use crate::args::CliArgs;
use crate::config::AppConfig;

/// Map the resolved configuration onto the builder. Missing required values
/// surface as `ChatError::ConfigurationMissing` before any session starts.
pub(super) fn build_client(args: &CliArgs, config: &AppConfig) -> anyhow::Result<AzureOpenAI> {
    let azure = &config.azure;
    let search = &config.search;
    let mut builder = GroundedChatBuilder::new();

    if let Some(endpoint) = &azure.endpoint {
        builder = builder.endpoint(endpoint);
    }
    if let Some(key) = &azure.api_key {
        builder = builder.api_key(key);
    }
    if let Some(deployment) = &azure.deployment {
        builder = builder.deployment_id(deployment);
    }
    if let Some(version) = &azure.api_version {
        builder = builder.api_version(version);
    }
    if let Some(embedding) = &azure.embedding_deployment {
        builder = builder.embedding_deployment(embedding);
    }
    if let Some(timeout) = azure.timeout_seconds {
        builder = builder.timeout_seconds(timeout);
    }
    if let Some(endpoint) = &search.endpoint {
        builder = builder.search_endpoint(endpoint);
    }
    if let Some(key) = &search.key {
        builder = builder.search_key(key);
    }
    if let Some(index) = args.index.as_ref().or(search.index.as_ref()) {
        builder = builder.index_name(index);
    }
    if let Some(semantic) = &search.semantic_configuration {
        builder = builder.semantic_configuration(semantic);
    }
    if let Some(query_type) = search.query_type {
        builder = builder.query_type(query_type);
    }

    builder
        .build()
        .context("cannot start a session with the current configuration")
}

/// `--persona` beats `chat.persona_file`; otherwise the built-in waiter.
pub(super) fn resolve_persona(args: &CliArgs, config: &AppConfig) -> anyhow::Result<String> {
    let path = args.persona.as_ref().or(config.chat.persona_file.as_ref());
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read persona file {}", path.display())),
        None => Ok(DEFAULT_PERSONA.to_string()),
    }
}
