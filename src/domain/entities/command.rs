use std::fmt;
use std::sync::Arc;

use crate::domain::traits::Handler;

/// Represents a bot command bound to its handler
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub handler: Arc<dyn Handler>,
}

impl Command {
    pub fn new<H>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        Self {
            name: normalize_name(&name.into()),
            description: None,
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name == normalize_name(input)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Strip surrounding whitespace and a leading `/` from a command name
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Message, Reply};

    fn noop(_: &Message) -> Reply {
        Reply::text("")
    }

    #[test]
    fn test_command_name_is_normalized() {
        let cmd = Command::new(" /start ", noop);
        assert_eq!(cmd.name, "start");
        assert!(cmd.matches("/start"));
        assert!(cmd.matches("start"));
        assert!(!cmd.matches("Start"));
    }

    #[test]
    fn test_command_description() {
        let cmd = Command::new("support", noop).with_description("Contact support");
        assert_eq!(cmd.description.as_deref(), Some("Contact support"));
    }
}
