//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and drains
//! them once per frame without blocking, implementing the core's
//! [`InputSource`](crate::core::InputSource).

pub mod handler;
pub mod map;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
