//! Shared types and constants for the Killer scorekeeper.
//!
//! Everything here is plain data with no dependencies, so it can be used from
//! the scoring engine, the terminal views and the headless script runner alike.
//!
//! # Rules at a glance
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `KILLER_THRESHOLD` | 5 | Score at which a player becomes a killer |
//! | `MIN_NUMBER` | 1 | Lowest dart number a player can own |
//! | `MAX_NUMBER` | 20 | Highest dart number a player can own |
//! | `MAX_PLAYERS` | 20 | One player per number on the board |
//!
//! # Examples
//!
//! ```
//! use killer_darts_types::{GameAction, PlayerStatus, KILLER_THRESHOLD, MAX_PLAYERS};
//!
//! assert_eq!(KILLER_THRESHOLD, 5);
//! assert_eq!(MAX_PLAYERS, 20);
//!
//! let action = GameAction::Hit(0);
//! assert_eq!(action.as_str(), "hit");
//!
//! assert_eq!(PlayerStatus::Killer.as_str(), "killer");
//! ```

/// Default score at which a player becomes a killer.
pub const KILLER_THRESHOLD: u8 = 5;

/// Lowest assignable dart number.
pub const MIN_NUMBER: u8 = 1;

/// Highest assignable dart number.
pub const MAX_NUMBER: u8 = 20;

/// Roster capacity (one player per dart number).
pub const MAX_PLAYERS: usize = MAX_NUMBER as usize;

/// Nicknames offered by the add-player prompt, as `(name, nickname)`.
///
/// Selecting a preset fills the name field with the nickname.
pub const PRESET_PLAYERS: [(&str, &str); 5] = [
    ("Isak", "Iceman"),
    ("Fredrik", "Fredelicious"),
    ("Gustav", "Gurra G"),
    ("Ludwig", "L. Jannerdart"),
    ("Emil", "Eagle Eye Emil"),
];

/// Returns true if `number` is a valid dart number (1..=20).
pub fn is_valid_number(number: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number)
}


/// Where a player stands in the current round.
///
/// - **Active**: still in, not yet a killer
/// - **Killer**: reached the threshold
/// - **Eliminated**: knocked out until the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    Active,
    Killer,
    Eliminated,
}

impl PlayerStatus {
    /// Lowercase string used in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Killer => "killer",
            PlayerStatus::Eliminated => "eliminated",
        }
    }

    /// Short label for table views.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "Player",
            PlayerStatus::Killer => "Killer",
            PlayerStatus::Eliminated => "Out",
        }
    }
}

/// Intents a view can hand to the scoring session.
///
/// Player indices refer to roster (join) order, not display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Add a player with a name and an unused dart number
    AddPlayer { name: String, number: u8 },
    /// Player at index hit their number
    Hit(usize),
    /// Undo one point from the player at index
    Miss(usize),
    /// Reset scores, killers and eliminations; keep the roster
    NewGame,
    /// Remove every player
    ResetAll,
    /// Rename the player at index
    ChangeName { index: usize, name: String },
    /// Move the player at index to another unused number
    ChangeNumber { index: usize, number: u8 },
    /// Drop the player at index from the roster
    RemovePlayer(usize),
}

impl GameAction {
    /// Short command name, matching the script runner's verbs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::AddPlayer { .. } => "add",
            GameAction::Hit(_) => "hit",
            GameAction::Miss(_) => "miss",
            GameAction::NewGame => "new",
            GameAction::ResetAll => "reset",
            GameAction::ChangeName { .. } => "rename",
            GameAction::ChangeNumber { .. } => "renumber",
            GameAction::RemovePlayer(_) => "remove",
        }
    }
}
