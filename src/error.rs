use std::time::Duration;

use thiserror::Error;

/// Errors raised while assembling a grounded chat session.
///
/// These are fatal to session start-up; retrying without fixing the
/// configuration will not help.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A required endpoint, deployment or credential was not provided
    #[error("missing configuration: {0}")]
    ConfigurationMissing(&'static str),
    /// A value was provided but cannot be used as-is
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Coarse classification of a failed completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The upstream service is throttling requests
    RateLimited,
    /// Any other failure: network, timeout, malformed or unexpected response
    Transient,
}

/// A classified completion failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionFailure {
    #[error("rate limited by completion service: {message}")]
    RateLimited {
        /// Delay requested by the service, if it sent one
        retry_after: Option<Duration>,
        message: String,
    },
    #[error("completion failed: {0}")]
    Transient(String),
}

/// Outcome of a single grounded completion call: the raw text of the first
/// choice, or a classified failure.
pub type CompletionResult = Result<String, CompletionFailure>;

impl CompletionFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            CompletionFailure::RateLimited { .. } => FailureKind::RateLimited,
            CompletionFailure::Transient(_) => FailureKind::Transient,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            CompletionFailure::RateLimited { retry_after, .. } => *retry_after,
            CompletionFailure::Transient(_) => None,
        }
    }
}

/// Transport errors carry a status when the server answered; a 429 is a
/// throttle, anything else (including no status at all) is transient.
impl From<reqwest::Error> for CompletionFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) {
            CompletionFailure::RateLimited {
                retry_after: None,
                message: err.to_string(),
            }
        } else {
            CompletionFailure::Transient(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CompletionFailure {
    fn from(err: serde_json::Error) -> Self {
        CompletionFailure::Transient(format!(
            "JSON parse error: {} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
