use serde::Serialize;

/// Role of a participant in a grounded conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Persona and grounding instructions, always the first turn
    System,
    /// The customer asking questions
    User,
    /// The model's grounded answer
    Assistant,
}

/// A single exchange unit in a conversation.
///
/// Turns are immutable once built; the store only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
