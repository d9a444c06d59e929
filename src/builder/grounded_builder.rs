use secrecy::SecretString;

use super::state::BuilderState;

/// Builder for configuring and instantiating a grounded chat client.
///
/// Required: [`endpoint`](Self::endpoint), [`api_key`](Self::api_key),
/// [`deployment_id`](Self::deployment_id),
/// [`search_endpoint`](Self::search_endpoint) and
/// [`search_key`](Self::search_key). Everything else has a default.
pub struct GroundedChatBuilder {
    pub(super) state: BuilderState,
}

impl Default for GroundedChatBuilder {
    fn default() -> Self {
        Self {
            state: BuilderState::new(),
        }
    }
}

impl GroundedChatBuilder {
    /// Creates a new empty builder instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completion service endpoint.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.state.endpoint = Some(url.into());
        self
    }

    /// Sets the subscription key, used for completions and embeddings.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.state.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the transport timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.state.timeout_seconds = Some(timeout_seconds);
        self
    }
}
