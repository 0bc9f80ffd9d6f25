//! Domain layer - Core business objects and abstractions
//!
//! This layer contains:
//! - Entities: Core business objects (User, Message, Reply, Command)
//! - Traits: Abstractions for infrastructure (Bot, Handler)

pub mod entities;
pub mod traits;
