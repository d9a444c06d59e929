use async_trait::async_trait;

use crate::error::CompletionResult;

use super::turn::Turn;

/// Providers that answer a conversation grounded on a retrieval index.
///
/// Implementations issue exactly one upstream call per invocation and
/// classify its outcome; they never retry and never touch conversation
/// state.
#[async_trait]
pub trait GroundedChatProvider: Send + Sync {
    async fn complete(&self, turns: &[Turn]) -> CompletionResult;
}
