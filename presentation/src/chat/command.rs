//! Slash commands understood by the chat REPL

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// `/country` alone shows the current country
    Country(Option<String>),
    Suggest(String),
    Source,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };
        let arg = (!arg.is_empty()).then(|| arg.to_string());

        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/country" | "/c" => ReplCommand::Country(arg),
            "/suggest" | "/s" => ReplCommand::Suggest(arg.unwrap_or_default()),
            "/source" => ReplCommand::Source,
            _ => ReplCommand::Unknown(name.to_string()),
        }
    }
}
