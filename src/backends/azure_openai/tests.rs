use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use super::*;
use crate::builder::GroundedChatBuilder;
use crate::chat::Role;
use crate::error::{CompletionFailure, FailureKind};

const COMPLETIONS_PATH: &str = "/openai/deployments/gpt-4o/chat/completions";

fn client_for(endpoint: &str) -> AzureOpenAI {
    GroundedChatBuilder::new()
        .endpoint(endpoint)
        .api_key("sub-key")
        .deployment_id("gpt-4o")
        .search_endpoint("https://menu.search.windows.net")
        .search_key("search-key")
        .timeout_seconds(5)
        .build()
        .expect("client")
}

fn history() -> Vec<Turn> {
    vec![
        Turn::new(Role::System, "persona"),
        Turn::new(Role::User, "What vegan options do you have?"),
    ]
}

#[test]
fn request_matches_data_source_wire_shape() {
    let client = client_for("https://menu.openai.azure.com");
    let turns = history();
    let body = build_chat_request(&turns, client.retrieval(), client.config.sampling);
    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(
        value,
        json!({
            "messages": [
                {"role": "system", "content": "persona"},
                {"role": "user", "content": "What vegan options do you have?"}
            ],
            "max_tokens": 800,
            "temperature": 0.7_f32,
            "top_p": 0.95_f32,
            "frequency_penalty": 0.0,
            "presence_penalty": 0.0,
            "data_sources": [{
                "type": "azure_search",
                "parameters": {
                    "endpoint": "https://menu.search.windows.net",
                    "index_name": "try1ragnlp",
                    "semantic_configuration": "azureml-default",
                    "authentication": {"type": "api_key", "key": "search-key"},
                    "embedding_dependency": {
                        "type": "endpoint",
                        "endpoint": "https://menu.openai.azure.com/openai/deployments/text-embedding-ada-002/embeddings?api-version=2023-07-01-preview",
                        "authentication": {"type": "api_key", "key": "sub-key"}
                    },
                    "query_type": "vector_simple_hybrid",
                    "top_n_documents": 5
                }
            }]
        })
    );
}

#[test]
fn debug_output_redacts_keys() {
    let client = client_for("https://menu.openai.azure.com");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("sub-key"));
    assert!(!rendered.contains("search-key"));
}

#[tokio::test]
async fn success_returns_raw_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::UrlEncoded(
            "api-version".into(),
            "2024-05-01-preview".into(),
        ))
        .match_header("api-key", "sub-key")
        .match_body(Matcher::PartialJson(json!({
            "data_sources": [{"type": "azure_search"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Tofu bowl [doc1]."}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let text = client.complete(&history()).await.expect("completion");

    mock.assert_async().await;
    assert_eq!(text, "Tofu bowl [doc1].");
}

#[tokio::test]
async fn status_429_carries_retry_after() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("retry-after", "17")
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.complete(&history()).await.unwrap_err();

    assert_eq!(
        err,
        CompletionFailure::RateLimited {
            retry_after: Some(Duration::from_secs(17)),
            message: "Too Many Requests".to_string(),
        }
    );
}

#[tokio::test]
async fn server_error_is_transient() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error":{"code":"InternalServerError","message":"index unavailable"}}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.complete(&history()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Transient);
    assert!(err.to_string().contains("index unavailable"));
}

#[tokio::test]
async fn malformed_body_is_transient() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.complete(&history()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transient);
}

#[tokio::test]
async fn unreachable_endpoint_is_transient() {
    // Reserve a free port, then release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{port}"));
    let err = client.complete(&history()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transient);
}

#[tokio::test]
async fn each_call_hits_the_service_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let _ = client.complete(&history()).await;

    mock.assert_async().await;
}
