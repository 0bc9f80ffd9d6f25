//! mahaai-bot - Telegram front end for the MahaAI quiz
//!
//! Answers `/start` with a greeting and a link to the quiz app, and
//! `/support` with a contact link. Every other message is ignored.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{BotError, CommandError, ConfigError};
pub use application::handlers::default_router;
pub use application::messaging::CommandRouter;
pub use domain::entities::{KeyboardButton, Message, Reply, User};
pub use domain::traits::{Bot, Handler};
