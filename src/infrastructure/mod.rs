//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Environment-driven configuration
//! - Adapters: Platform integrations (Telegram, in-memory)

pub mod config;
pub mod adapters;
