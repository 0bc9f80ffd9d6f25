//! Telegram adapter

pub mod poller;
pub mod types;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::errors::BotError;
use crate::domain::entities::{Command, Reply};
use crate::domain::traits::{Bot, BotInfo};
use crate::infrastructure::config::{Config, DEFAULT_API_URL};

use types::{ApiResponse, BotCommand, InlineKeyboardMarkup, Me, SentMessage, Update};

pub use poller::Poller;

/// Telegram bot adapter
pub struct TelegramAdapter {
    token: String,
    base_url: String,
    client: Client,
    info: BotInfo,
}

impl TelegramAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Create an adapter talking to a custom Bot API server
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            info: BotInfo {
                id: "unknown".to_string(),
                name: "mahaai-bot".to_string(),
                username: "mahaai_bot".to_string(),
            },
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.token.clone(), &config.api_url)
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// POST a JSON request to a Bot API method and unwrap the response envelope
    async fn call<Req, Res>(&self, method: &str, request: &Req) -> Result<Res, BotError>
    where
        Req: Serialize + ?Sized + Sync,
        Res: DeserializeOwned,
    {
        let response = self.client
            .post(self.api_url(method))
            .json(request)
            .send()
            .await
            .map_err(|e| BotError::Network(format!("{}: {}", method, strip_token(&e.to_string(), &self.token))))?;

        let status = response.status();
        let data: ApiResponse<Res> = response
            .json()
            .await
            .map_err(|e| BotError::Parse(format!("{} ({}): {}", method, status, e)))?;

        if !data.ok {
            let description = data.description.unwrap_or_else(|| status.to_string());
            return Err(BotError::Api(format!("{}: {}", method, description)));
        }

        data.result
            .ok_or_else(|| BotError::Parse(format!("{}: missing result", method)))
    }

    /// Fetch bot info from Telegram API
    pub async fn fetch_bot_info(&mut self) -> Result<(), BotError> {
        let me: Me = self.call("getMe", &serde_json::json!({})).await?;

        self.info = BotInfo {
            id: me.id.to_string(),
            name: me.first_name,
            username: me.username.unwrap_or_default(),
        };

        Ok(())
    }

    /// Get updates from Telegram using getUpdates API
    pub async fn get_updates(&self, offset: i64, timeout: u64) -> Result<Vec<Update>, BotError> {
        #[derive(Serialize)]
        struct GetUpdatesRequest {
            offset: i64,
            timeout: u64,
            allowed_updates: Vec<String>,
        }

        let request = GetUpdatesRequest {
            offset,
            timeout,
            allowed_updates: vec!["message".to_string()],
        };

        self.call("getUpdates", &request).await
    }

    /// Get the next update offset
    pub fn get_next_offset(updates: &[Update]) -> Option<i64> {
        updates.iter().map(|u| u.update_id + 1).max()
    }

    /// Publish the described commands as the bot's command menu
    pub async fn register_commands(&self, commands: &[&Command]) -> Result<(), BotError> {
        #[derive(Serialize)]
        struct SetMyCommandsRequest {
            commands: Vec<BotCommand>,
        }

        let commands: Vec<BotCommand> = commands
            .iter()
            .filter_map(|cmd| {
                cmd.description.as_ref().map(|desc| BotCommand {
                    command: cmd.name.clone(),
                    description: desc.clone(),
                })
            })
            .collect();

        let count = commands.len();
        let _: bool = self.call("setMyCommands", &SetMyCommandsRequest { commands }).await?;

        tracing::info!("Registered {} bot commands with Telegram", count);
        Ok(())
    }
}

/// Remove the bot token from error text that may embed the request URL
fn strip_token(text: &str, token: &str) -> String {
    if token.is_empty() {
        text.to_string()
    } else {
        text.replace(token, "<token>")
    }
}

#[async_trait]
impl Bot for TelegramAdapter {
    async fn send_reply(&self, chat_id: &str, reply: &Reply) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: &'a str,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_markup: Option<InlineKeyboardMarkup>,
        }

        tracing::debug!("Sending to {}: {}", chat_id, reply.text);

        let request = SendMessageRequest {
            chat_id,
            text: &reply.text,
            reply_markup: InlineKeyboardMarkup::from_reply(reply),
        };

        let sent: SentMessage = self.call("sendMessage", &request).await?;
        Ok(sent.message_id.to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
