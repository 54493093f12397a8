//! Scoring engine for Killer darts - pure, synchronous, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependency on terminals, files or threads, so the same session can sit
//! behind the terminal scoreboard, the script runner, or a test.
//!
//! # Module Structure
//!
//! - [`player`]: the player record and its derived status
//! - [`rules`]: pure hit/miss transitions over a roster slice
//! - [`session`]: the owned session (roster, winner, round) and its operations
//! - [`snapshot`]: owned, serializable copies for views
//! - [`error`]: roster edit rejections
//!
//! # Game Rules
//!
//! - **Hit**: +1 point, capped at the threshold (5 by default)
//! - **Killer**: reaching the threshold makes a player a killer
//! - **Knock-out**: when a new killer emerges, every player still on zero is eliminated
//! - **Winner**: the last player standing after a hit
//! - **Miss**: -1 point; killer status is recomputed from the new score
//!
//! # Example
//!
//! ```
//! use killer_darts_core::Session;
//!
//! let mut session = Session::new();
//! session.add_player("Iceman", 20).unwrap();
//! session.add_player("Gurra G", 7).unwrap();
//!
//! for _ in 0..5 {
//!     session.apply_hit(0);
//! }
//!
//! assert!(session.player(0).unwrap().is_killer);
//! assert!(session.player(1).unwrap().eliminated);
//! assert_eq!(session.winner(), Some("Iceman"));
//! ```

pub mod error;
pub mod player;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use killer_darts_types as types;

pub use error::RosterError;
pub use player::Player;
pub use rules::{ScoreEvent, ScoreKind};
pub use session::Session;
pub use snapshot::{PlayerSnapshot, SessionSnapshot};
