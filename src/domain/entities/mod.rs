//! Domain entities - Core business objects

pub mod user;
pub mod message;
pub mod command;
pub mod reply;

pub use user::{User, greeting_name, FALLBACK_NAME};
pub use message::Message;
pub use command::Command;
pub use reply::{KeyboardButton, Reply};
