//! Session module - owns the roster and applies intents
//!
//! A [`Session`] is the single mutable piece of state in the program. Views
//! read it through [`Session::snapshot`] and forward intents through
//! [`Session::apply_action`] or the individual operations.

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::error::RosterError;
use crate::player::Player;
use crate::rules::{self, ScoreEvent};
use crate::snapshot::{PlayerSnapshot, SessionSnapshot};
use crate::types::{is_valid_number, GameAction, KILLER_THRESHOLD, MAX_NUMBER, MAX_PLAYERS};

/// One game night: an ordered roster plus the current winner.
#[derive(Debug, Clone)]
pub struct Session {
    players: ArrayVec<Player, MAX_PLAYERS>,
    winner: Option<String>,
    /// Roster index the winner name belongs to, while that player is still listed.
    winner_index: Option<usize>,
    threshold: u8,
    /// Increments on every new game, starts at 1.
    round: u32,
    /// Last scoring transition (consumed by views).
    last_event: Option<ScoreEvent>,
}

impl Session {
    /// Create an empty session using the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(KILLER_THRESHOLD)
    }

    /// Create an empty session with a custom killer threshold (clamped to 1..=20).
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            players: ArrayVec::new(),
            winner: None,
            winner_index: None,
            threshold: threshold.clamp(1, MAX_NUMBER),
            round: 1,
            last_event: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn alive_count(&self) -> usize {
        rules::count_alive(&self.players)
    }

    pub fn killer_count(&self) -> usize {
        rules::count_killers(&self.players)
    }

    pub fn available_numbers(&self) -> ArrayVec<u8, MAX_PLAYERS> {
        rules::available_numbers(&self.players)
    }

    /// Roster indices in the order the scoreboard lists them (number descending).
    pub fn display_order(&self) -> ArrayVec<usize, MAX_PLAYERS> {
        rules::display_order(&self.players)
    }

    /// Peek at the last scoring transition.
    pub fn last_event(&self) -> Option<&ScoreEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last scoring transition.
    pub fn take_last_event(&mut self) -> Option<ScoreEvent> {
        self.last_event.take()
    }

    /// Append a new player. Returns the roster index.
    pub fn add_player(&mut self, name: &str, number: u8) -> Result<usize, RosterError> {
        let name = validate_name(name)?;
        self.check_number(number, None)?;
        if self.players.is_full() {
            return Err(RosterError::RosterFull);
        }

        self.players.push(Player::new(name, number));
        info!("added player {:?} on {}", name, number);
        Ok(self.players.len() - 1)
    }

    /// Score a hit for the player at `index`.
    ///
    /// Returns `None` and leaves the session untouched when the hit is not
    /// allowed (unknown index, eliminated player, already at threshold).
    pub fn apply_hit(&mut self, index: usize) -> Option<ScoreEvent> {
        let Some(event) = rules::apply_hit(&mut self.players, index, self.threshold) else {
            debug!("hit on player {} ignored", index);
            return None;
        };

        if event.became_killer {
            info!(
                "{} is a killer, {} knocked out",
                self.players[index].name,
                event.knocked_out.len()
            );
        }
        if let Some(w) = event.winner {
            let name = self.players[w].name.clone();
            info!("winner: {}", name);
            self.winner = Some(name);
            self.winner_index = Some(w);
        }

        self.last_event = Some(event.clone());
        Some(event)
    }

    /// Take a point back from the player at `index`.
    ///
    /// Never reconsiders eliminations or the winner.
    pub fn apply_miss(&mut self, index: usize) -> Option<ScoreEvent> {
        let Some(event) = rules::apply_miss(&mut self.players, index, self.threshold) else {
            debug!("miss on player {} ignored", index);
            return None;
        };

        if event.lost_killer {
            info!("{} is no longer a killer", self.players[index].name);
        }

        self.last_event = Some(event.clone());
        Some(event)
    }

    /// Start a new round with the same players.
    pub fn new_game(&mut self) {
        for p in self.players.iter_mut() {
            p.reset_round();
        }
        self.winner = None;
        self.winner_index = None;
        self.last_event = None;
        self.round = self.round.wrapping_add(1);
        info!("round {} started with {} players", self.round, self.players.len());
    }

    /// Drop every player and start over.
    pub fn reset_all(&mut self) {
        *self = Self::with_threshold(self.threshold);
        info!("session reset");
    }

    /// Give the player at `index` a different dart number.
    ///
    /// Setting a player's own current number is accepted and changes nothing.
    pub fn change_number(&mut self, index: usize, number: u8) -> Result<(), RosterError> {
        if index >= self.players.len() {
            return Err(RosterError::NoSuchPlayer(index));
        }
        self.check_number(number, Some(index))?;
        self.players[index].number = number;
        Ok(())
    }

    /// Rename the player at `index`.
    ///
    /// Renaming the winning player carries the new name over to the winner.
    /// Namesakes of the winner are not affected.
    pub fn change_name(&mut self, index: usize, name: &str) -> Result<(), RosterError> {
        let name = validate_name(name)?;
        let player = self
            .players
            .get_mut(index)
            .ok_or(RosterError::NoSuchPlayer(index))?;

        if self.winner_index == Some(index) {
            self.winner = Some(name.to_string());
        }
        player.name = name.to_string();
        Ok(())
    }

    /// Remove the player at `index` from the roster.
    ///
    /// Later players shift down by one index. The winner name is left as is,
    /// but a removed winner no longer follows renames.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, RosterError> {
        if index >= self.players.len() {
            return Err(RosterError::NoSuchPlayer(index));
        }
        let removed = self.players.remove(index);
        self.winner_index = match self.winner_index {
            Some(w) if w == index => None,
            Some(w) if w > index => Some(w - 1),
            other => other,
        };
        self.last_event = None;
        info!("removed player {:?}", removed.name);
        Ok(removed)
    }

    /// Apply an intent from a view. Returns whether the session changed.
    ///
    /// Rejected roster edits are logged and reported as "no change".
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        self.try_apply(action).unwrap_or_else(|e| {
            warn!("rejected roster edit: {}", e);
            false
        })
    }

    /// Like [`apply_action`](Self::apply_action) but hands roster errors back.
    pub fn try_apply(&mut self, action: GameAction) -> Result<bool, RosterError> {
        match action {
            GameAction::AddPlayer { name, number } => self.add_player(&name, number).map(|_| true),
            GameAction::Hit(index) => Ok(self.apply_hit(index).is_some()),
            GameAction::Miss(index) => Ok(self.apply_miss(index).is_some()),
            GameAction::NewGame => {
                self.new_game();
                Ok(true)
            }
            GameAction::ResetAll => {
                self.reset_all();
                Ok(true)
            }
            GameAction::ChangeName { index, name } => self.change_name(index, &name).map(|_| true),
            GameAction::ChangeNumber { index, number } => {
                self.change_number(index, number).map(|_| true)
            }
            GameAction::RemovePlayer(index) => self.remove_player(index).map(|_| true),
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.players.clear();
        out.players.extend(self.players.iter().map(PlayerSnapshot::from));
        out.winner.clone_from(&self.winner);
        out.threshold = self.threshold;
        out.round = self.round;
        out.alive = self.alive_count() as u8;
        out.killers = self.killer_count() as u8;
        out.available_numbers.clear();
        out.available_numbers.extend(self.available_numbers());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn check_number(&self, number: u8, except: Option<usize>) -> Result<(), RosterError> {
        if !is_valid_number(number) {
            return Err(RosterError::NumberOutOfRange(number));
        }
        if rules::number_in_use(&self.players, number, except) {
            return Err(RosterError::NumberTaken(number));
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<&str, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        Err(RosterError::EmptyName)
    } else {
        Ok(name)
    }
}
