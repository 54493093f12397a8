use thiserror::Error;

/// Rejected roster edits.
///
/// Scoring itself never fails; only adding, renaming, renumbering and removing
/// players can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("number {0} is outside the dartboard (1-20)")]
    NumberOutOfRange(u8),
    #[error("number {0} is already taken")]
    NumberTaken(u8),
    #[error("every number already has a player")]
    RosterFull,
    #[error("no player at index {0}")]
    NoSuchPlayer(usize),
}
