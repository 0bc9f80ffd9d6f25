//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing and routing
//! - Handlers: The bot's command replies

pub mod errors;
pub mod handlers;
pub mod messaging;
