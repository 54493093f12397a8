//! Scoreboard controller: one session plus the UI state around it.
//!
//! `App` turns key presses into session intents. It owns the cursor (a
//! roster index), the open prompt if any, and the status line. It never
//! draws; `view_state()` hands the view what it needs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{ScoreEvent, Session, SessionSnapshot};
use crate::input::{handle_key_event, should_quit, EditOutcome, LineEditor, UiCommand};
use crate::term::{Overlay, ViewState};
use crate::types::{GameAction, PRESET_PLAYERS};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    AddName,
    AddNumber { name: String },
    Rename(usize),
    Renumber(usize),
}

impl Stage {
    fn title(&self) -> &'static str {
        match self {
            Stage::AddName | Stage::AddNumber { .. } => "Add player",
            Stage::Rename(_) => "Rename player",
            Stage::Renumber(_) => "Change number",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Stage::AddName | Stage::Rename(_) => "Tab: nicknames  Enter: ok  Esc: cancel",
            Stage::AddNumber { .. } | Stage::Renumber(_) => {
                "Tab: free numbers  Enter: ok  Esc: cancel"
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Prompt {
    stage: Stage,
    editor: LineEditor,
}

#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    selected: Option<usize>,
    prompt: Option<Prompt>,
    status: Option<String>,
    quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl App {
    pub fn new(session: Session) -> Self {
        let selected = session.display_order().first().copied();
        Self {
            session,
            selected,
            prompt: None,
            status: None,
            quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Roster index under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn view_state(&self) -> ViewState<'_> {
        ViewState {
            selected: self.selected,
            status: self.status.as_deref(),
            overlay: self.prompt.as_ref().map(|p| Overlay {
                title: p.stage.title(),
                label: p.editor.label(),
                input: p.editor.buffer(),
                hint: p.stage.hint(),
            }),
        }
    }

    /// Fingerprint of everything on screen: the snapshot plus UI state.
    pub fn frame_fingerprint(&self, snap: &SessionSnapshot) -> u64 {
        let mut h = DefaultHasher::new();
        snap.fingerprint().hash(&mut h);
        self.selected.hash(&mut h);
        self.status.hash(&mut h);
        if let Some(p) = &self.prompt {
            p.stage.hint().hash(&mut h);
            p.editor.label().hash(&mut h);
            p.editor.buffer().hash(&mut h);
        }
        h.finish()
    }

    /// Feed one key press. Release and repeat events are filtered by the caller.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.quit = true;
                return;
            }
            self.handle_prompt_key(key.code);
            return;
        }

        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(cmd) = handle_key_event(key) {
            self.apply_command(cmd);
        }
    }

    pub fn apply_command(&mut self, cmd: UiCommand) {
        match cmd {
            UiCommand::SelectPrev => self.move_selection(false),
            UiCommand::SelectNext => self.move_selection(true),
            UiCommand::Hit => {
                if let Some(index) = self.require_selection() {
                    self.score(index, true);
                }
            }
            UiCommand::Miss => {
                if let Some(index) = self.require_selection() {
                    self.score(index, false);
                }
            }
            UiCommand::AddPlayer => self.open_add_prompt(),
            UiCommand::Rename => {
                if let Some(index) = self.require_selection() {
                    let current = self.player_name(index);
                    let editor = LineEditor::text("Name")
                        .with_initial(&current)
                        .with_suggestions(self.free_nicknames());
                    self.open_prompt(Stage::Rename(index), editor);
                }
            }
            UiCommand::Renumber => {
                if let Some(index) = self.require_selection() {
                    let current = self.session.player(index).map_or(0, |p| p.number);
                    let editor = LineEditor::numeric("Number")
                        .with_initial(&current.to_string())
                        .with_suggestions(self.free_numbers());
                    self.open_prompt(Stage::Renumber(index), editor);
                }
            }
            UiCommand::Remove => {
                if let Some(index) = self.require_selection() {
                    let name = self.player_name(index);
                    if self.edit(GameAction::RemovePlayer(index)) {
                        self.selected = match self.session.len() {
                            0 => None,
                            n => Some(index.min(n - 1)),
                        };
                        self.status = Some(format!("Removed {name}"));
                    }
                }
            }
            UiCommand::NewGame => {
                self.session.new_game();
                self.status = Some(format!("Round {} - good luck!", self.session.round()));
            }
            UiCommand::ResetAll => {
                self.session.reset_all();
                self.selected = None;
                self.status = Some("All players removed".to_string());
            }
        }
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };
        match prompt.editor.handle_key_press(code) {
            EditOutcome::Pending => self.prompt = Some(prompt),
            EditOutcome::Cancel => self.status = None,
            EditOutcome::Submit(text) => {
                if !self.submit(&prompt.stage, &text) {
                    self.prompt = Some(prompt);
                }
            }
        }
    }

    /// Returns false to keep the prompt open.
    fn submit(&mut self, stage: &Stage, text: &str) -> bool {
        match stage {
            Stage::AddName => {
                if text.is_empty() {
                    self.status = Some("Name cannot be empty".to_string());
                    return false;
                }
                let numbers = self.free_numbers();
                let first = numbers.first().map(|n| n.to_string()).unwrap_or_default();
                let editor = LineEditor::numeric(format!("Number for {text}"))
                    .with_initial(&first)
                    .with_suggestions(numbers);
                self.status = None;
                self.open_prompt(
                    Stage::AddNumber {
                        name: text.to_string(),
                    },
                    editor,
                );
                true
            }
            Stage::AddNumber { name } => {
                let Some(number) = self.parse_number(text) else {
                    return false;
                };
                let action = GameAction::AddPlayer {
                    name: name.clone(),
                    number,
                };
                if !self.edit(action) {
                    return false;
                }
                self.selected = Some(self.session.len() - 1);
                self.status = Some(format!("{name} plays on {number}"));
                true
            }
            Stage::Rename(index) => {
                let index = *index;
                if !self.edit(GameAction::ChangeName {
                    index,
                    name: text.to_string(),
                }) {
                    return false;
                }
                self.status = Some(format!("Renamed to {}", self.player_name(index)));
                true
            }
            Stage::Renumber(index) => {
                let index = *index;
                let Some(number) = self.parse_number(text) else {
                    return false;
                };
                if !self.edit(GameAction::ChangeNumber { index, number }) {
                    return false;
                }
                self.status = Some(format!("{} now plays on {number}", self.player_name(index)));
                true
            }
        }
    }

    fn open_add_prompt(&mut self) {
        if self.session.available_numbers().is_empty() {
            self.status = Some("Every number is taken".to_string());
            return;
        }
        let editor = LineEditor::text("Name").with_suggestions(self.free_nicknames());
        self.open_prompt(Stage::AddName, editor);
    }

    fn open_prompt(&mut self, stage: Stage, editor: LineEditor) {
        self.prompt = Some(Prompt { stage, editor });
    }

    /// Apply a roster edit; errors go to the status line.
    fn edit(&mut self, action: GameAction) -> bool {
        match self.session.try_apply(action) {
            Ok(changed) => changed,
            Err(e) => {
                self.status = Some(capitalize(&e.to_string()));
                false
            }
        }
    }

    fn score(&mut self, index: usize, hit: bool) {
        let action = if hit {
            GameAction::Hit(index)
        } else {
            GameAction::Miss(index)
        };
        self.session.apply_action(action);
        self.status = Some(match self.session.take_last_event() {
            Some(event) => self.describe(&event),
            None => self.refusal(index, hit),
        });
    }

    fn describe(&self, event: &ScoreEvent) -> String {
        let name = self.player_name(event.index);
        let mut msg = if event.became_killer {
            match event.knocked_out.len() {
                0 => format!("{name} is a KILLER!"),
                1 => format!("{name} is a KILLER! 1 player knocked out"),
                n => format!("{name} is a KILLER! {n} players knocked out"),
            }
        } else if event.lost_killer {
            format!("{name} is no longer a killer")
        } else {
            format!("{name}: {}/{}", event.score, self.session.threshold())
        };
        if let Some(w) = event.winner {
            msg.push_str(&format!(" {} wins!", self.player_name(w)));
        }
        msg
    }

    fn refusal(&self, index: usize, hit: bool) -> String {
        let Some(p) = self.session.player(index) else {
            return "No such player".to_string();
        };
        if p.eliminated {
            format!("{} is out", p.name)
        } else if hit {
            format!("{} is already on {}", p.name, p.score)
        } else {
            format!("{} has no points to lose", p.name)
        }
    }

    fn move_selection(&mut self, down: bool) {
        let order = self.session.display_order();
        if order.is_empty() {
            self.selected = None;
            return;
        }
        let pos = self
            .selected
            .and_then(|sel| order.iter().position(|&i| i == sel));
        let next = match (pos, down) {
            (None, _) => 0,
            (Some(p), true) => (p + 1).min(order.len() - 1),
            (Some(p), false) => p.saturating_sub(1),
        };
        self.selected = Some(order[next]);
    }

    fn require_selection(&mut self) -> Option<usize> {
        match self.selected.filter(|&i| i < self.session.len()) {
            Some(i) => Some(i),
            None => {
                self.status = Some("Select a player first".to_string());
                None
            }
        }
    }

    fn parse_number(&mut self, text: &str) -> Option<u8> {
        match text.parse::<u8>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.status = Some("Enter a number from 1 to 20".to_string());
                None
            }
        }
    }

    fn player_name(&self, index: usize) -> String {
        self.session
            .player(index)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    fn free_numbers(&self) -> Vec<String> {
        self.session
            .available_numbers()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    /// Preset nicknames not already on the roster.
    fn free_nicknames(&self) -> Vec<&'static str> {
        PRESET_PLAYERS
            .iter()
            .map(|&(_, nick)| nick)
            .filter(|nick| self.session.players().iter().all(|p| p.name != *nick))
            .collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for ch in s.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("number 7 is already taken"), "Number 7 is already taken");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_typed_q_in_prompt_does_not_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "qq");
        assert!(!app.should_quit());
        assert_eq!(app.view_state().overlay.map(|o| o.input), Some("qq"));
    }

    #[test]
    fn test_ctrl_c_quits_from_prompt() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut session = Session::new();
        session.add_player("Low", 3).unwrap();
        session.add_player("High", 19).unwrap();
        session.add_player("Mid", 10).unwrap();
        let mut app = App::new(session);

        // Highest number is shown first.
        assert_eq!(app.selected(), Some(1));
        app.apply_command(UiCommand::SelectNext);
        assert_eq!(app.selected(), Some(2));
        app.apply_command(UiCommand::SelectNext);
        assert_eq!(app.selected(), Some(0));
        app.apply_command(UiCommand::SelectNext);
        assert_eq!(app.selected(), Some(0));
        app.apply_command(UiCommand::SelectPrev);
        assert_eq!(app.selected(), Some(2));
    }
}
