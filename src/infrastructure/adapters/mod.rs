//! Platform adapters

pub mod memory;
pub mod telegram;

pub use memory::MemoryAdapter;
pub use telegram::TelegramAdapter;
