//! Terminal scoreboard rendering.
//!
//! The scoreboard is drawn into a plain framebuffer and then flushed to the
//! terminal, so the view code stays pure and can be asserted on in tests.
//!
//! - [`fb`]: styled character grid
//! - [`scoreboard_view`]: snapshot to framebuffer, no I/O
//! - [`renderer`]: diffing crossterm backend
//! - [`render_throttle`]: skip redraws when nothing changed

pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod scoreboard_view;

pub use killer_darts_core as core;
pub use killer_darts_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scoreboard_view::{Overlay, ScoreboardView, ViewState, Viewport};
