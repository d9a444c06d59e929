use std::fmt;
use std::time::Duration;

use crate::chat::Turn;
use crate::error::{CompletionFailure, FailureKind};

/// Wait suggested to the user when the service does not say how long.
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Non-fatal notice returned instead of an assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub kind: FailureKind,
    /// Only set for rate limiting, and only when the service sent a hint.
    pub retry_after: Option<Duration>,
}

impl Advisory {
    pub fn rate_limited(retry_after: Option<Duration>) -> Self {
        Self {
            kind: FailureKind::RateLimited,
            retry_after,
        }
    }

    pub fn transient() -> Self {
        Self {
            kind: FailureKind::Transient,
            retry_after: None,
        }
    }
}

impl From<&CompletionFailure> for Advisory {
    fn from(failure: &CompletionFailure) -> Self {
        match failure.kind() {
            FailureKind::RateLimited => Advisory::rate_limited(failure.retry_after()),
            FailureKind::Transient => Advisory::transient(),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::RateLimited => {
                // Round sub-second hints up so we never say "0 seconds".
                let wait = self.retry_after.unwrap_or(DEFAULT_RETRY_AFTER);
                let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
                write!(
                    f,
                    "The assistant is currently busy. Please try again in {secs} seconds."
                )
            }
            FailureKind::Transient => f.write_str(
                "An error occurred while processing your request. Please try again later.",
            ),
        }
    }
}

/// What the presentation layer should show after a submitted turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayResult {
    /// The user turn and the sanitized assistant answer, both now stored.
    Turns { user: Turn, assistant: Turn },
    /// The call failed; the user turn is stored but unanswered.
    Advisory(Advisory),
}
