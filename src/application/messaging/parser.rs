//! Command parser - Extracts the command token from message text

/// Command prefix recognized at the start of a message
pub const COMMAND_PREFIX: char = '/';

/// A command extracted from message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub mention: Option<String>,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Whether the command is addressed to the bot with the given username.
    /// Commands without a mention are addressed to every bot in the chat.
    pub fn is_addressed_to(&self, bot_username: &str) -> bool {
        match &self.mention {
            Some(mention) => mention.eq_ignore_ascii_case(bot_username.trim_start_matches('@')),
            None => true,
        }
    }
}

/// Parse the leading command token of `text`, e.g. `/start@my_bot arg`
pub fn parse_command(text: &str) -> Option<ParsedCommand> {
    let text = text.trim_start();
    let rest = text.strip_prefix(COMMAND_PREFIX)?;
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.split_whitespace();
    let token = parts.next()?;

    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention.to_string())),
        None => (token, None),
    };

    if name.is_empty() {
        return None;
    }

    Some(ParsedCommand {
        name: name.to_string(),
        mention,
        args: parts.map(|s| s.to_string()).collect(),
    })
}
