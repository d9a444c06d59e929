use crate::chat::{Role, Turn};

/// Append-only dialogue history for one session.
///
/// The first turn is the persona (`Role::System`) once [`initialize`] has
/// run. Nothing is ever reordered, removed or truncated: the complete
/// history goes to the provider on every call, so request size grows with
/// the session.
///
/// [`initialize`]: ConversationStore::initialize
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    turns: Vec<Turn>,
}

impl ConversationStore {
    /// Create an empty store; call [`initialize`](Self::initialize) before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the persona turn.
    ///
    /// Returns `true` if the store was empty and the persona was added,
    /// `false` if a history already exists (which is left untouched).
    pub fn initialize(&mut self, persona: impl Into<String>) -> bool {
        if !self.turns.is_empty() {
            return false;
        }
        self.turns.push(Turn::new(Role::System, persona));
        true
    }

    /// Append a turn and return the new length. Role order is not checked.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> usize {
        self.turns.push(Turn::new(role, content));
        self.turns.len()
    }

    /// The `n` most recent turns, oldest first.
    pub fn last(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Full history in insertion order.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn system_turn(&self) -> Option<&Turn> {
        self.turns.first().filter(|t| t.role() == Role::System)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
