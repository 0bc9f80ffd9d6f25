//! Message handling - Command parsing and routing

pub mod parser;
pub mod router;

pub use parser::{parse_command, ParsedCommand};
pub use router::CommandRouter;
