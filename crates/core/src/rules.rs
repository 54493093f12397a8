//! Rules module - the Killer scoring transitions
//!
//! These are pure functions over a roster slice. [`crate::Session`] owns the
//! roster and calls into them; they are exposed so other front ends can drive
//! the same rules without a session.
//!
//! Rule summary:
//! - A hit adds one point, capped at the threshold.
//! - Reaching the threshold makes the player a killer. The hit path latches the
//!   flag: it is only ever set here, never cleared.
//! - When the number of killers goes up, every remaining player still on zero
//!   points is eliminated in the same transition.
//! - When exactly one player is left standing, that player wins.
//! - A miss takes one point back and recomputes the killer flag from the new
//!   score. It never touches eliminations or the winner.

use arrayvec::ArrayVec;

use crate::player::Player;
use crate::types::{MAX_NUMBER, MAX_PLAYERS, MIN_NUMBER};

/// Which intent produced a [`ScoreEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Hit,
    Miss,
}

/// Result of a scoring transition that changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    pub kind: ScoreKind,
    /// Roster index of the player that scored.
    pub index: usize,
    /// The player's score after the transition.
    pub score: u8,
    /// A new killer emerged (hits only).
    pub became_killer: bool,
    /// The player dropped below the threshold and lost killer status (misses only).
    pub lost_killer: bool,
    /// Roster indices eliminated by this transition.
    pub knocked_out: ArrayVec<usize, MAX_PLAYERS>,
    /// Roster index of the sole survivor, if this transition decided the game.
    pub winner: Option<usize>,
}

impl ScoreEvent {
    fn new(kind: ScoreKind, index: usize, score: u8) -> Self {
        Self {
            kind,
            index,
            score,
            became_killer: false,
            lost_killer: false,
            knocked_out: ArrayVec::new(),
            winner: None,
        }
    }
}

/// Apply a hit to the player at `index`.
///
/// Returns `None` (roster untouched) if the index is out of range, the player
/// is eliminated, or the player is already at `threshold`. The roster may
/// hold at most [`MAX_PLAYERS`] players.
pub fn apply_hit(players: &mut [Player], index: usize, threshold: u8) -> Option<ScoreEvent> {
    debug_assert!(players.len() <= MAX_PLAYERS, "roster larger than the dartboard");
    let target = players.get(index)?;
    if target.eliminated || target.score >= threshold {
        return None;
    }

    let killers_before = count_killers(players);

    let target = &mut players[index];
    target.score += 1;
    if !target.is_killer && target.score >= threshold {
        target.is_killer = true;
    }
    let mut event = ScoreEvent::new(ScoreKind::Hit, index, target.score);

    event.became_killer = count_killers(players) > killers_before;
    if event.became_killer {
        for (i, p) in players.iter_mut().enumerate() {
            if p.score == 0 && !p.eliminated {
                p.eliminated = true;
                // Bounded by the debug_assert above.
                let _ = event.knocked_out.try_push(i);
            }
        }
    }

    event.winner = sole_survivor(players);
    Some(event)
}

/// Apply a miss to the player at `index`.
///
/// Returns `None` if the index is out of range, the player is eliminated, or
/// the player has no points.
pub fn apply_miss(players: &mut [Player], index: usize, threshold: u8) -> Option<ScoreEvent> {
    let target = players.get_mut(index)?;
    if target.eliminated || target.score == 0 {
        return None;
    }

    let was_killer = target.is_killer;
    target.score -= 1;
    target.is_killer = target.score >= threshold;

    let mut event = ScoreEvent::new(ScoreKind::Miss, index, target.score);
    event.lost_killer = was_killer && !target.is_killer;
    Some(event)
}

/// Index of the only non-eliminated player, if exactly one remains.
pub fn sole_survivor(players: &[Player]) -> Option<usize> {
    let mut alive = players.iter().enumerate().filter(|(_, p)| p.is_alive());
    match (alive.next(), alive.next()) {
        (Some((i, _)), None) => Some(i),
        _ => None,
    }
}

pub fn count_killers(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_killer).count()
}

pub fn count_alive(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_alive()).count()
}

/// True if some player other than `except` holds `number`.
pub fn number_in_use(players: &[Player], number: u8, except: Option<usize>) -> bool {
    players
        .iter()
        .enumerate()
        .any(|(i, p)| p.number == number && Some(i) != except)
}

/// Dart numbers not held by any player, ascending.
pub fn available_numbers(players: &[Player]) -> ArrayVec<u8, MAX_PLAYERS> {
    (MIN_NUMBER..=MAX_NUMBER)
        .filter(|&n| !number_in_use(players, n, None))
        .collect()
}

/// Roster indices ordered by dart number, highest first.
pub fn display_order(players: &[Player]) -> ArrayVec<usize, MAX_PLAYERS> {
    let mut order: ArrayVec<usize, MAX_PLAYERS> =
        (0..players.len().min(MAX_PLAYERS)).collect();
    order.sort_by(|&a, &b| players[b].number.cmp(&players[a].number));
    order
}
