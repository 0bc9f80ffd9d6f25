use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::entities::{Message, Reply};
use super::Bot;

/// Handler trait - given an incoming message, produce and send one reply
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError>;
}

/// Plain functions building a reply are handlers; the reply goes back to the message's chat
#[async_trait]
impl<F> Handler for F
where
    F: Fn(&Message) -> Reply + Send + Sync,
{
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError> {
        let reply = self(message);
        bot.send_reply(&message.chat_id, &reply).await?;
        Ok(())
    }
}
