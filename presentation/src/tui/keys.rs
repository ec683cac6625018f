//! Key bindings for the assessment form
//!
//! The form has a single editing mode: printable keys go to the focused
//! field, navigation keys move focus, Enter submits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move focus to the next field
    NextField,
    /// Move focus to the previous field
    PrevField,
    /// Append a character to the focused field
    InsertChar(char),
    /// Delete the last character of the focused field (Backspace)
    DeleteChar,
    /// Empty the focused field (Ctrl+U)
    ClearField,
    /// Submit the assessment (Enter)
    Submit,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearField,
            (KeyCode::Esc, _) => Action::Quit,

            (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::NextField,
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,

            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Backspace, _) => Action::DeleteChar,

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),

            _ => Action::None,
        }
    }
}
