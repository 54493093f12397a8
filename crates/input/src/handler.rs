//! Single-line text editor for scoreboard prompts.
//!
//! Used for player names and dart numbers. Tab cycles through a list of
//! suggestions (preset nicknames, free numbers) and replaces the buffer.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::MAX_PLAYERS;

/// Longest name the scoreboard will store.
pub const MAX_INPUT_LEN: usize = 24;

/// Result of feeding one key into the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Still editing
    Pending,
    /// Enter pressed with this text
    Submit(String),
    /// Esc pressed
    Cancel,
}

#[derive(Debug, Clone)]
pub struct LineEditor {
    label: String,
    buffer: String,
    digits_only: bool,
    suggestions: ArrayVec<String, MAX_PLAYERS>,
    /// Index of the suggestion currently shown, if Tab has been pressed.
    cursor: Option<usize>,
}

impl LineEditor {
    /// Free-text editor (names).
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            buffer: String::new(),
            digits_only: false,
            suggestions: ArrayVec::new(),
            cursor: None,
        }
    }

    /// Digits-only editor (dart numbers).
    pub fn numeric(label: impl Into<String>) -> Self {
        Self {
            digits_only: true,
            ..Self::text(label)
        }
    }

    /// Pre-fill the buffer, e.g. with the current name when renaming.
    pub fn with_initial(mut self, initial: &str) -> Self {
        self.buffer.clear();
        for ch in initial.chars() {
            self.push_char(ch);
        }
        self
    }

    /// Suggestions cycled by Tab. Extras beyond the capacity are dropped.
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions.clear();
        for s in suggestions {
            if self.suggestions.try_push(s.into()).is_err() {
                break;
            }
        }
        self.cursor = None;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> EditOutcome {
        match code {
            KeyCode::Enter => EditOutcome::Submit(self.buffer.trim().to_string()),
            KeyCode::Esc => EditOutcome::Cancel,
            KeyCode::Backspace => {
                self.buffer.pop();
                self.cursor = None;
                EditOutcome::Pending
            }
            KeyCode::Tab => {
                self.cycle(true);
                EditOutcome::Pending
            }
            KeyCode::BackTab => {
                self.cycle(false);
                EditOutcome::Pending
            }
            KeyCode::Char(ch) => {
                self.push_char(ch);
                self.cursor = None;
                EditOutcome::Pending
            }
            _ => EditOutcome::Pending,
        }
    }

    fn push_char(&mut self, ch: char) {
        if self.buffer.chars().count() >= MAX_INPUT_LEN || ch.is_control() {
            return;
        }
        if self.digits_only && !ch.is_ascii_digit() {
            return;
        }
        self.buffer.push(ch);
    }

    fn cycle(&mut self, forward: bool) {
        let n = self.suggestions.len();
        if n == 0 {
            return;
        }
        let next = match (self.cursor, forward) {
            (None, true) => 0,
            (None, false) => n - 1,
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
        };
        self.cursor = Some(next);
        self.buffer.clone_from(&self.suggestions[next]);
    }
}
