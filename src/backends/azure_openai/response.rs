use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{CompletionFailure, CompletionResult};

/// Error codes some gateways use for throttling when the HTTP status has
/// been rewritten.
const RATE_LIMIT_CODES: &[&str] = &["429", "TooManyRequests", "RateLimitExceeded"];

#[derive(Deserialize, Debug)]
pub(super) struct AzureChatResponse {
    #[serde(default)]
    choices: Vec<AzureChatChoice>,
}

#[derive(Deserialize, Debug)]
struct AzureChatChoice {
    message: AzureChatMsg,
}

#[derive(Deserialize, Debug)]
struct AzureChatMsg {
    content: Option<String>,
}

impl AzureChatResponse {
    /// Content of the first choice, untouched.
    pub(super) fn into_text(self) -> CompletionResult {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionFailure::Transient("response has no choices".into()))?;
        choice
            .message
            .content
            .ok_or_else(|| CompletionFailure::Transient("first choice has no content".into()))
    }
}

#[derive(Deserialize, Debug)]
struct AzureErrorEnvelope {
    error: AzureErrorBody,
}

#[derive(Deserialize, Debug)]
struct AzureErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Classify a non-success response.
///
/// The status decides first. Only when it is not 429 is the error body's
/// `code` field consulted.
pub(super) fn classify_error(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> CompletionFailure {
    let envelope = serde_json::from_str::<AzureErrorEnvelope>(body).ok();
    let message = envelope
        .as_ref()
        .and_then(|e| e.error.message.clone())
        .unwrap_or_else(|| body.to_string());

    let code_says_throttled = envelope
        .as_ref()
        .and_then(|e| e.error.code.as_ref())
        .map(code_to_string)
        .is_some_and(|code| RATE_LIMIT_CODES.iter().any(|c| c.eq_ignore_ascii_case(&code)));

    if status == StatusCode::TOO_MANY_REQUESTS || code_says_throttled {
        CompletionFailure::RateLimited {
            retry_after,
            message,
        }
    } else {
        CompletionFailure::Transient(format!("Azure OpenAI returned {status}: {message}"))
    }
}

fn code_to_string(code: &serde_json::Value) -> String {
    match code {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reads `retry-after-ms` or `retry-after` (whole seconds).
pub(super) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };
    read("retry-after-ms")
        .map(Duration::from_millis)
        .or_else(|| read("retry-after").map(Duration::from_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use reqwest::header::HeaderValue;

    #[test]
    fn first_choice_content_is_returned_verbatim() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":" Hi [doc1] "}},{"message":{"content":"second"}}]}"#;
        let parsed: AzureChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().unwrap(), " Hi [doc1] ");
    }

    #[test]
    fn missing_choices_or_content_is_transient() {
        let empty: AzureChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.into_text().unwrap_err().kind(), FailureKind::Transient);

        let null: AzureChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(null.into_text().unwrap_err().kind(), FailureKind::Transient);
    }

    #[test]
    fn status_429_is_rate_limited() {
        let failure = classify_error(
            StatusCode::TOO_MANY_REQUESTS,
            Some(Duration::from_secs(5)),
            "not json",
        );
        assert_eq!(
            failure,
            CompletionFailure::RateLimited {
                retry_after: Some(Duration::from_secs(5)),
                message: "not json".to_string(),
            }
        );
    }

    #[test]
    fn throttle_code_in_body_is_rate_limited() {
        let body = r#"{"error":{"code":"429","message":"Requests exceeded call rate limit"}}"#;
        let failure = classify_error(StatusCode::BAD_REQUEST, None, body);
        assert_eq!(failure.kind(), FailureKind::RateLimited);

        let numeric = r#"{"error":{"code":429}}"#;
        let failure = classify_error(StatusCode::FAILED_DEPENDENCY, None, numeric);
        assert_eq!(failure.kind(), FailureKind::RateLimited);
    }

    #[test]
    fn other_errors_are_transient() {
        let body = r#"{"error":{"code":"InternalServerError","message":"oops"}}"#;
        let failure = classify_error(StatusCode::INTERNAL_SERVER_ERROR, None, body);
        assert_eq!(failure.kind(), FailureKind::Transient);
        assert!(failure.to_string().contains("oops"));
    }

    #[test]
    fn message_mentioning_429_is_not_a_throttle() {
        let body = r#"{"error":{"code":"BadRequest","message":"table 429 not found"}}"#;
        let failure = classify_error(StatusCode::BAD_REQUEST, None, body);
        assert_eq!(failure.kind(), FailureKind::Transient);
    }

    #[test]
    fn retry_after_prefers_milliseconds() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("2"));
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(2)));

        headers.insert("retry-after-ms", HeaderValue::from_static("1500"));
        assert_eq!(retry_after(&headers), Some(Duration::from_millis(1500)));

        assert_eq!(retry_after(&HeaderMap::new()), None);
    }
}
