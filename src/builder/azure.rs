use super::grounded_builder::GroundedChatBuilder;

impl GroundedChatBuilder {
    /// Set the API version (Azure OpenAI).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.state.api_version = Some(api_version.into());
        self
    }

    /// Set the chat deployment id (Azure OpenAI).
    pub fn deployment_id(mut self, deployment_id: impl Into<String>) -> Self {
        self.state.deployment_id = Some(deployment_id.into());
        self
    }

    /// Set the embedding deployment used to vectorize search queries.
    pub fn embedding_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.state.embedding_deployment = Some(deployment.into());
        self
    }
}
