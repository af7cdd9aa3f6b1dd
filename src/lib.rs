//! TUI Racer (workspace facade crate).
//!
//! Re-exports the member crates under `tui_racer::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tui_racer_core as core;
pub use tui_racer_input as input;
pub use tui_racer_term as term;
pub use tui_racer_types as types;
