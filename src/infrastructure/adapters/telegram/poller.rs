//! Long-polling loop for Telegram Bot API `getUpdates`.
//!
//! Each batch of updates is dispatched concurrently through the
//! [`CommandRouter`]; a failed dispatch is logged and that update is dropped.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::application::errors::BotError;
use crate::application::messaging::CommandRouter;
use crate::domain::entities::Message;
use super::types::Update;
use super::TelegramAdapter;

const MAX_BACKOFF_SECS: u64 = 60;

/// Feeds updates from a [`TelegramAdapter`] into a [`CommandRouter`]
pub struct Poller {
    adapter: Arc<TelegramAdapter>,
    router: Arc<CommandRouter>,
    timeout_secs: u64,
    offset: i64,
}

impl Poller {
    pub fn new(adapter: Arc<TelegramAdapter>, router: Arc<CommandRouter>) -> Self {
        Self {
            adapter,
            router,
            timeout_secs: 30,
            offset: 0,
        }
    }

    /// Long-poll timeout passed to `getUpdates`
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Fetch one batch of updates and dispatch them, returning how many were received
    pub async fn poll_once(&mut self) -> Result<usize, BotError> {
        let updates = self.adapter.get_updates(self.offset, self.timeout_secs).await?;
        if updates.is_empty() {
            return Ok(0);
        }

        tracing::info!("Received {} updates", updates.len());
        if let Some(next) = TelegramAdapter::get_next_offset(&updates) {
            self.offset = self.offset.max(next);
        }

        let count = updates.len();
        let mut tasks = JoinSet::new();
        for update in updates {
            let adapter = Arc::clone(&self.adapter);
            let router = Arc::clone(&self.router);
            tasks.spawn(async move { handle_update(&adapter, &router, update).await });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Update task panicked: {}", e);
            }
        }

        Ok(count)
    }

    /// Poll until `shutdown` completes, backing off when `getUpdates` fails
    pub async fn run_until<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut backoff_secs = 1u64;

        tracing::info!("Starting message loop...");

        loop {
            let result = tokio::select! {
                result = self.poll_once() => result,
                _ = &mut shutdown => {
                    tracing::info!("Shutting down poller");
                    return;
                }
            };

            match result {
                Ok(_) => backoff_secs = 1,
                Err(e) => {
                    tracing::warn!("getUpdates failed: {}, retrying in {}s", e, backoff_secs);
                    tokio::select! {
                        _ = tokio::time::sleep(Duration::from_secs(backoff_secs)) => {}
                        _ = &mut shutdown => {
                            tracing::info!("Shutting down poller");
                            return;
                        }
                    }
                    backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
                }
            }
        }
    }
}

/// Dispatch a single update; send errors stop here
async fn handle_update(adapter: &TelegramAdapter, router: &CommandRouter, update: Update) {
    let update_id = update.update_id;
    let Some(message) = update.message else {
        return;
    };
    let message: Message = message.into();

    match router.dispatch(adapter, &message).await {
        Ok(true) => tracing::debug!("Update {} handled", update_id),
        Ok(false) => {}
        Err(e) => tracing::warn!("Dropping update {} for chat {}: {}", update_id, message.chat_id, e),
    }
}
