use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::player::Player;
use crate::types::{PlayerStatus, KILLER_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub number: u8,
    pub score: u8,
    pub is_killer: bool,
    pub eliminated: bool,
    #[serde(serialize_with = "serialize_status")]
    pub status: PlayerStatus,
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            name: value.name.clone(),
            number: value.number,
            score: value.score,
            is_killer: value.is_killer,
            eliminated: value.eliminated,
            status: value.status(),
        }
    }
}

/// Owned copy of a session for views and the script runner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionSnapshot {
    /// Roster order (join order).
    pub players: Vec<PlayerSnapshot>,
    pub winner: Option<String>,
    pub threshold: u8,
    pub round: u32,
    pub alive: u8,
    pub killers: u8,
    pub available_numbers: Vec<u8>,
}

impl SessionSnapshot {
    /// Roster indices ordered by number, highest first.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_by(|&a, &b| self.players[b].number.cmp(&self.players[a].number));
        order
    }

    /// Hash of the visible state, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            players: Vec::with_capacity(crate::types::MAX_PLAYERS),
            winner: None,
            threshold: KILLER_THRESHOLD,
            round: 1,
            alive: 0,
            killers: 0,
            available_numbers: Vec::with_capacity(crate::types::MAX_PLAYERS),
        }
    }
}

fn serialize_status<S: Serializer>(status: &PlayerStatus, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(status.as_str())
}
