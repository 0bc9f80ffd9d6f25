//! In-memory adapter for development/testing
//!
//! Records every reply instead of delivering it, and can be switched into a
//! failing mode to exercise send-error propagation.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::application::errors::BotError;
use crate::domain::entities::Reply;
use crate::domain::traits::{Bot, BotInfo};

/// A reply captured by [`MemoryAdapter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub chat_id: String,
    pub reply: Reply,
}

/// Bot adapter that keeps sent replies in memory
pub struct MemoryAdapter {
    info: BotInfo,
    sent: Mutex<Vec<SentReply>>,
    next_id: AtomicU64,
    fail_sends: AtomicBool,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self {
            info: BotInfo {
                id: "memory".to_string(),
                name: "mahaai-bot".to_string(),
                username: "mahaai_bot".to_string(),
            },
            sent: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_sends: AtomicBool::new(false),
        }
    }

    /// Make every following send fail with a network error
    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of everything sent so far
    pub async fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }
}

impl Default for MemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for MemoryAdapter {
    async fn send_reply(&self, chat_id: &str, reply: &Reply) -> Result<String, BotError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(BotError::Network("memory adapter: send disabled".to_string()));
        }

        tracing::debug!("[memory] {} <- {}", chat_id, reply.text);
        self.sent.lock().await.push(SentReply {
            chat_id: chat_id.to_string(),
            reply: reply.clone(),
        });

        Ok(self.next_id.fetch_add(1, Ordering::SeqCst).to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
