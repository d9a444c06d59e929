/// Slash commands understood by the REPL. Anything else is a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Command {
    History(Option<usize>),
    New,
    Quit,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let command = match name.as_str() {
            "history" => Command::History(parts.next().and_then(|n| n.parse().ok())),
            "new" => Command::New,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(name),
        };
        Some(command)
    }
}
