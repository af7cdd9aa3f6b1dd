//! Terminal renderer for the road.
//!
//! A small, game-oriented rendering layer: frames are drawn into a plain
//! framebuffer, then flushed to the terminal as a diff against the previous
//! frame. No widget toolkit is involved.
//!
//! - [`game_view`] maps a [`FrameSnapshot`](core::FrameSnapshot) onto cells
//! - [`renderer`] owns the terminal and encodes frames with crossterm
//! - [`sink`] ties both to the session's `RenderSink` seam

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod sink;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, RoadLayout, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
pub use sink::{TerminalSink, STATIC_REDRAW_MS};
