use std::io::Write;
use std::sync::Arc;

use grounded_chat::engine::ConversationEngine;
use grounded_chat::{GroundedChatProvider, Role};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::Command;
use super::render::{render_result, render_turn};

const BANNER: &str = "Ask about the menu, popular dishes, allergies, vegan options or daily specials.\n\
Commands: /history [n], /new, /quit";

/// Line-oriented session loop. Ends on `/quit` or end of input.
pub(super) async fn run_repl<R, W>(
    provider: Arc<dyn GroundedChatProvider>,
    persona: &str,
    history_display: usize,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{BANNER}")?;
    let mut engine = ConversationEngine::new(Arc::clone(&provider), persona);
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::New) => {
                let previous = engine.store().len();
                engine = ConversationEngine::new(Arc::clone(&provider), persona);
                log::info!("Discarded session with {previous} turns");
                writeln!(out, "Started a new conversation.")?;
            }
            Some(Command::History(n)) => {
                // The persona turn is never shown.
                let turns = engine.last(n.unwrap_or(history_display));
                for turn in turns.iter().filter(|t| t.role() != Role::System) {
                    writeln!(out, "{}", render_turn(turn))?;
                }
            }
            Some(Command::Unknown(name)) => writeln!(out, "Unknown command: /{name}")?,
            None => {
                if let Some(result) = engine.submit(&line).await {
                    writeln!(out, "{}", render_result(&result))?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use grounded_chat::{CompletionFailure, CompletionResult, Turn};

    const PERSONA: &str = "You are a waiter.";

    struct QueuedProvider {
        replies: Mutex<VecDeque<CompletionResult>>,
        seen: Mutex<Vec<Vec<Turn>>>,
    }

    impl QueuedProvider {
        fn with(replies: Vec<CompletionResult>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                seen: Mutex::default(),
            })
        }

        fn calls(&self) -> Vec<Vec<Turn>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GroundedChatProvider for QueuedProvider {
        async fn complete(&self, turns: &[Turn]) -> CompletionResult {
            self.seen.lock().unwrap().push(turns.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(CompletionFailure::Transient("no reply queued".into())))
        }
    }

    async fn transcript(provider: Arc<QueuedProvider>, input: &str) -> String {
        let mut out = Vec::new();
        run_repl(provider, PERSONA, 10, input.as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn history_hides_the_persona_turn() {
        let provider = QueuedProvider::with(vec![Ok("Minestrone [doc1].".into())]);
        let output = transcript(provider, "Soup?\n/history\n/history 1\n").await;

        let expected = format!(
            "{BANNER}\n\
             > You: Soup?\nAssistant: Minestrone.\n\
             > You: Soup?\nAssistant: Minestrone.\n\
             > Assistant: Minestrone.\n\
             > "
        );
        assert_eq!(output, expected);
        assert!(!output.contains(PERSONA));
    }

    #[tokio::test]
    async fn new_reseeds_persona_and_drops_history() {
        let provider = QueuedProvider::with(vec![Ok("Minestrone.".into()), Ok("Carbonara.".into())]);
        let output = transcript(Arc::clone(&provider), "Soup?\n/new\nPasta?\n/history\n").await;

        assert!(output.contains("Started a new conversation."));
        assert!(output.contains("Assistant: Carbonara."));

        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            vec![Turn::new(Role::System, PERSONA), Turn::new(Role::User, "Pasta?")]
        );

        let after_new = output.split("Started a new conversation.").nth(1).unwrap();
        assert!(!after_new.contains("Soup?"));
    }

    #[tokio::test]
    async fn quit_stops_reading_input() {
        let provider = QueuedProvider::with(vec![Ok("Yes.".into())]);
        let output = transcript(Arc::clone(&provider), "Vegan pizza?\n/quit\nStill there?\n").await;

        assert_eq!(provider.calls().len(), 1);
        assert!(!output.contains("Still there?"));
        assert!(output.ends_with("> "));
    }

    #[tokio::test]
    async fn failures_and_unknown_commands_are_reported() {
        let provider = QueuedProvider::with(vec![Err(CompletionFailure::Transient("502".into()))]);
        let output = transcript(Arc::clone(&provider), "Soup?\n/menu\n   \n").await;

        assert!(output.contains(
            "⚠️ An error occurred while processing your request. Please try again later."
        ));
        assert!(output.contains("Unknown command: /menu"));
        // Blank lines never reach the provider.
        assert_eq!(provider.calls().len(), 1);
    }
}
