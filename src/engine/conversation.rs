use std::sync::Arc;

use crate::chat::{strip_citations, GroundedChatProvider, Role, Turn};
use crate::memory::ConversationStore;

use super::display::{Advisory, DisplayResult};

/// Runs the turn cycle for one session.
///
/// The engine owns its [`ConversationStore`]; the provider can be shared
/// between sessions. `submit` takes `&mut self`, so a session never has two
/// completion calls in flight.
pub struct ConversationEngine {
    provider: Arc<dyn GroundedChatProvider>,
    store: ConversationStore,
}

impl ConversationEngine {
    /// Start a new session seeded with `persona`.
    pub fn new(provider: Arc<dyn GroundedChatProvider>, persona: impl Into<String>) -> Self {
        Self::with_store(provider, ConversationStore::new(), persona)
    }

    /// Resume with an existing store. `persona` is only used if the store
    /// is still empty.
    pub fn with_store(
        provider: Arc<dyn GroundedChatProvider>,
        mut store: ConversationStore,
        persona: impl Into<String>,
    ) -> Self {
        if store.initialize(persona) {
            log::info!("Started new conversation session");
        }
        Self { provider, store }
    }

    /// Submit one user utterance.
    ///
    /// Returns `None` without touching the store or the provider when the
    /// text is empty or whitespace. Provider failures come back as
    /// [`DisplayResult::Advisory`] and leave the user turn unanswered.
    pub async fn submit(&mut self, user_text: &str) -> Option<DisplayResult> {
        if user_text.trim().is_empty() {
            return None;
        }

        self.store.append(Role::User, user_text);

        let outcome = self.provider.complete(self.store.snapshot()).await;
        let result = match outcome {
            Ok(raw) => {
                let answer = strip_citations(&raw);
                self.store.append(Role::Assistant, answer.as_str());
                DisplayResult::Turns {
                    user: Turn::new(Role::User, user_text),
                    assistant: Turn::new(Role::Assistant, answer),
                }
            }
            Err(failure) => {
                log::warn!(
                    "Turn left unanswered ({:?}); {} turns in history",
                    failure.kind(),
                    self.store.len()
                );
                DisplayResult::Advisory(Advisory::from(&failure))
            }
        };
        Some(result)
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// The `n` most recent turns, for transcript display.
    pub fn last(&self, n: usize) -> &[Turn] {
        self.store.last(n)
    }

    /// Tear down the session and hand back its history.
    pub fn into_store(self) -> ConversationStore {
        self.store
    }
}
