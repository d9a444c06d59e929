use grounded_chat::engine::DisplayResult;
use grounded_chat::{FailureKind, Role, Turn};

pub(super) fn render_result(result: &DisplayResult) -> String {
    match result {
        DisplayResult::Turns { user, assistant } => {
            format!("{}\n{}", render_turn(user), render_turn(assistant))
        }
        DisplayResult::Advisory(advisory) => {
            let icon = match advisory.kind {
                FailureKind::RateLimited => "⏳",
                FailureKind::Transient => "⚠️",
            };
            format!("{icon} {advisory}")
        }
    }
}

pub(super) fn render_turn(turn: &Turn) -> String {
    let label = match turn.role() {
        Role::System => "System",
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    format!("{label}: {}", turn.content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grounded_chat::engine::Advisory;

    #[test]
    fn renders_turn_pair() {
        let result = DisplayResult::Turns {
            user: Turn::new(Role::User, "Soup?"),
            assistant: Turn::new(Role::Assistant, "Minestrone."),
        };
        assert_eq!(render_result(&result), "You: Soup?\nAssistant: Minestrone.");
    }

    #[test]
    fn renders_busy_notice() {
        let result = DisplayResult::Advisory(Advisory::rate_limited(None));
        assert_eq!(
            render_result(&result),
            "⏳ The assistant is currently busy. Please try again in 60 seconds."
        );
    }
}
