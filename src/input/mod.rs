//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Movement
//! repeat relies on terminal auto-repeat; the engine applies each discrete
//! command immediately.

pub mod map;

pub use map::{handle_key_event, should_quit};
