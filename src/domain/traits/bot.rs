use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::entities::Reply;

/// Bot trait - abstraction for the messaging platform's send capability
#[async_trait]
pub trait Bot: Send + Sync {
    /// Send a reply (text plus optional link buttons) to a chat, returning the platform message id
    async fn send_reply(&self, chat_id: &str, reply: &Reply) -> Result<String, BotError>;

    /// Send plain text to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
        self.send_reply(chat_id, &Reply::text(text)).await
    }

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
