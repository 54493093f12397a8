//! Terminal input module.
//!
//! Maps `crossterm` key events onto scoreboard commands and provides a small
//! line editor for the name and number prompts. Nothing in here touches the
//! session; the app controller turns commands into [`crate::types::GameAction`]s.

pub mod handler;
pub mod map;

pub use killer_darts_types as types;

pub use handler::{EditOutcome, LineEditor};
pub use map::{handle_key_event, should_quit, UiCommand};
