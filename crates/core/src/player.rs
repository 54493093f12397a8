//! Player record.

use serde::Serialize;

use crate::types::PlayerStatus;

/// One participant in the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub name: String,
    pub number: u8,
    pub score: u8,
    pub is_killer: bool,
    pub eliminated: bool,
}

impl Player {
    /// Create a fresh player with no score.
    pub fn new(name: impl Into<String>, number: u8) -> Self {
        Self {
            name: name.into(),
            number,
            score: 0,
            is_killer: false,
            eliminated: false,
        }
    }

    pub fn status(&self) -> PlayerStatus {
        if self.eliminated {
            PlayerStatus::Eliminated
        } else if self.is_killer {
            PlayerStatus::Killer
        } else {
            PlayerStatus::Active
        }
    }

    /// Still in contention this round.
    pub fn is_alive(&self) -> bool {
        !self.eliminated
    }

    /// Clear the per-round fields, keeping name and number.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.is_killer = false;
        self.eliminated = false;
    }
}
