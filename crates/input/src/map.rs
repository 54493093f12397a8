//! Key mapping from terminal events to scoreboard commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the scoreboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Move the cursor one row up
    SelectPrev,
    /// Move the cursor one row down
    SelectNext,
    /// Score a hit for the selected player
    Hit,
    /// Take a point back from the selected player
    Miss,
    /// Open the add-player prompt
    AddPlayer,
    /// Open the rename prompt for the selected player
    Rename,
    /// Open the renumber prompt for the selected player
    Renumber,
    /// Remove the selected player
    Remove,
    /// New round, same players
    NewGame,
    /// Drop every player
    ResetAll,
}

/// Map keyboard input to scoreboard commands.
pub fn handle_key_event(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(UiCommand::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(UiCommand::SelectNext),

        // Scoring
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('+') | KeyCode::Char(' ') => {
            Some(UiCommand::Hit)
        }
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('-') => Some(UiCommand::Miss),

        // Roster
        KeyCode::Char('a') | KeyCode::Char('A') => Some(UiCommand::AddPlayer),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(UiCommand::Rename),
        KeyCode::Char('#') | KeyCode::Char('n') | KeyCode::Char('N') => Some(UiCommand::Renumber),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => Some(UiCommand::Remove),

        // Session
        KeyCode::Char('g') | KeyCode::Char('G') => Some(UiCommand::NewGame),
        // Uppercase only, so a stray `r` can't wipe the roster.
        KeyCode::Char('R') => Some(UiCommand::ResetAll),

        _ => None,
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(UiCommand::SelectPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(UiCommand::SelectNext)
        );
    }

    #[test]
    fn test_scoring_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(UiCommand::Hit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(UiCommand::Hit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(UiCommand::Hit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(UiCommand::Miss)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(UiCommand::Miss)
        );
    }

    #[test]
    fn test_roster_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(UiCommand::AddPlayer)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('e'))),
            Some(UiCommand::Rename)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('#'))),
            Some(UiCommand::Renumber)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(UiCommand::Remove)
        );
    }

    #[test]
    fn test_reset_needs_uppercase() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(UiCommand::ResetAll)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('r'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(UiCommand::NewGame)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
