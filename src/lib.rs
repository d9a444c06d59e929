//! Retrieval-augmented conversation engine.
//!
//! Answers questions about a fixed corpus (a restaurant menu) by sending the
//! conversation to Azure OpenAI with an Azure AI Search data source attached,
//! stripping citation markers from the answer and turning upstream failures
//! into advisories instead of errors.
//!
//! ```no_run
//! use std::sync::Arc;
//! use grounded_chat::{builder::GroundedChatBuilder, engine::{ConversationEngine, DisplayResult, DEFAULT_PERSONA}};
//!
//! # async fn run() -> Result<(), grounded_chat::error::ChatError> {
//! let client = GroundedChatBuilder::new()
//!     .endpoint("https://my-resource.openai.azure.com")
//!     .api_key("subscription-key")
//!     .deployment_id("gpt-4o")
//!     .search_endpoint("https://my-search.search.windows.net")
//!     .search_key("search-key")
//!     .build()?;
//!
//! let mut engine = ConversationEngine::new(Arc::new(client), DEFAULT_PERSONA);
//! match engine.submit("What vegan options do you have?").await {
//!     Some(DisplayResult::Turns { assistant, .. }) => println!("{}", assistant.content()),
//!     Some(DisplayResult::Advisory(notice)) => eprintln!("{notice}"),
//!     None => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
#[cfg(feature = "azure_openai")]
pub mod builder;
pub mod chat;
pub mod engine;
pub mod error;
pub mod memory;
pub mod retrieval;

pub use chat::{GroundedChatProvider, Role, Turn};
pub use error::{ChatError, CompletionFailure, CompletionResult, FailureKind};
