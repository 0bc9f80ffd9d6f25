//! Command router - Routes command messages to their handlers

use std::collections::HashMap;

use crate::application::errors::{BotError, CommandError};
use crate::domain::entities::{command::normalize_name, Command, Message};
use crate::domain::traits::{Bot, Handler};
use super::parser::parse_command;

/// Maps command names to handlers and dispatches incoming messages.
///
/// Registering the same name twice fails; the first registration stays.
/// Read-only after construction, so one router can be shared across tasks.
#[derive(Default)]
pub struct CommandRouter {
    commands: HashMap<String, Command>,
    bot_username: Option<String>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept `/cmd@mention` when the mention names this bot
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.set_bot_username(username);
        self
    }

    pub fn set_bot_username(&mut self, username: impl Into<String>) {
        let username = username.into();
        self.bot_username = Some(username.trim_start_matches('@').to_string());
    }

    /// Associate `name` with `handler`
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H) -> Result<(), CommandError>
    where
        H: Handler + 'static,
    {
        self.register_command(Command::new(name, handler))
    }

    /// Register a command built with [`Command::new`]
    pub fn register_command(&mut self, command: Command) -> Result<(), CommandError> {
        let name = normalize_name(&command.name);
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '@') {
            return Err(CommandError::InvalidName(command.name));
        }
        if self.commands.contains_key(&name) {
            return Err(CommandError::Duplicate(name));
        }

        tracing::debug!("Registered command /{}", name);
        self.commands.insert(name, command);
        Ok(())
    }

    /// Route a message to its handler.
    ///
    /// Returns `Ok(false)` when the message is not a registered command for
    /// this bot. Errors raised while sending the reply propagate unchanged.
    pub async fn dispatch(&self, bot: &dyn Bot, message: &Message) -> Result<bool, BotError> {
        let Some(parsed) = message.text().and_then(parse_command) else {
            return Ok(false);
        };

        if let Some(username) = &self.bot_username {
            if !parsed.is_addressed_to(username) {
                tracing::debug!("[{}] /{} addressed to another bot", message.chat_id, parsed.name);
                return Ok(false);
            }
        }

        let Some(command) = self.commands.get(&parsed.name) else {
            tracing::debug!("[{}] Ignoring unknown command /{}", message.chat_id, parsed.name);
            return Ok(false);
        };

        tracing::info!(
            "[{}] /{} from {}",
            message.chat_id,
            command.name,
            message.sender.as_ref().map(|u| u.display_name()).unwrap_or_default()
        );

        command.handler.handle(bot, message).await?;
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered commands, sorted by name
    pub fn commands(&self) -> Vec<&Command> {
        let mut commands: Vec<&Command> = self.commands.values().collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::entities::Reply;
    use crate::infrastructure::adapters::memory::MemoryAdapter;

    fn echo(message: &Message) -> Reply {
        Reply::text(format!("echo: {}", message.text().unwrap_or_default()))
    }

    fn pong(_: &Message) -> Reply {
        Reply::text("pong")
    }

    struct SilentHandler;

    #[async_trait]
    impl Handler for SilentHandler {
        async fn handle(&self, _bot: &dyn Bot, _message: &Message) -> Result<(), BotError> {
            Ok(())
        }
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut router = CommandRouter::new();
        router.register("ping", pong).unwrap();

        let err = router.register("/ping", echo).unwrap_err();
        assert_eq!(err, CommandError::Duplicate("ping".to_string()));
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut router = CommandRouter::new();
        assert!(matches!(router.register("", pong), Err(CommandError::InvalidName(_))));
        assert!(matches!(router.register("/", pong), Err(CommandError::InvalidName(_))));
        assert!(matches!(router.register("two words", pong), Err(CommandError::InvalidName(_))));
        assert!(router.is_empty());
    }

    #[test]
    fn test_commands_sorted_by_name() {
        let mut router = CommandRouter::new();
        router.register("support", pong).unwrap();
        router.register("start", pong).unwrap();
        router.register("about", SilentHandler).unwrap();

        let names: Vec<&str> = router.commands().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["about", "start", "support"]);
        assert!(router.contains("/start"));
    }

    #[tokio::test]
    async fn test_dispatch_invokes_registered_handler() {
        let mut router = CommandRouter::new();
        router.register("ping", pong).unwrap();
        let bot = MemoryAdapter::new();

        let handled = router.dispatch(&bot, &Message::from_text("7", "/ping")).await.unwrap();
        assert!(handled);

        let sent = bot.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].chat_id, "7");
        assert_eq!(sent[0].reply.text, "pong");
    }

    #[tokio::test]
    async fn test_dispatch_ignores_unknown_and_plain_text() {
        let mut router = CommandRouter::new();
        router.register("ping", pong).unwrap();
        let bot = MemoryAdapter::new();

        for text in ["/unknown", "ping", "hello", ""] {
            let handled = router.dispatch(&bot, &Message::from_text("7", text)).await.unwrap();
            assert!(!handled, "{text:?} should not be handled");
        }
        assert!(!router.dispatch(&bot, &Message::new("7")).await.unwrap());
        assert!(bot.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_respects_bot_mention() {
        let mut router = CommandRouter::new().with_bot_username("@mahaai_bot");
        router.register("ping", pong).unwrap();
        let bot = MemoryAdapter::new();

        assert!(router.dispatch(&bot, &Message::from_text("1", "/ping@mahaai_bot")).await.unwrap());
        assert!(!router.dispatch(&bot, &Message::from_text("1", "/ping@other_bot")).await.unwrap());
        assert_eq!(bot.sent().await.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_propagates_send_errors() {
        let mut router = CommandRouter::new();
        router.register("ping", pong).unwrap();
        let bot = MemoryAdapter::new();
        bot.fail_sends(true);

        let err = router.dispatch(&bot, &Message::from_text("1", "/ping")).await.unwrap_err();
        assert!(matches!(err, BotError::Network(_)));
    }

    #[tokio::test]
    async fn test_custom_handler_may_skip_sending() {
        let mut router = CommandRouter::new();
        router.register("quiet", SilentHandler).unwrap();
        let bot = MemoryAdapter::new();

        assert!(router.dispatch(&bot, &Message::from_text("1", "/quiet")).await.unwrap());
        assert!(bot.sent().await.is_empty());
    }
}
