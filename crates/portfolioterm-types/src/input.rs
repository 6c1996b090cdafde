//! Front-end-agnostic input event types.
//!
//! Every front end maps its native key events to these enums. The session
//! never sees raw terminal input.

use serde::{Deserialize, Serialize};

/// A front-end-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed into the input line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// A navigation or action key pressed.
    KeyPress(Key),
    /// User requested quit (Ctrl-C, window close, etc.).
    Quit,
}

/// Action keys the terminal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Older history entry.
    Up,
    /// Newer history entry.
    Down,
    /// Submit the input line.
    Enter,
    /// Complete the input line.
    Tab,
    /// Discard the input line.
    Escape,
}

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryDirection {
    /// Toward older commands.
    Up,
    /// Toward newer commands, and finally the empty line.
    Down,
}

impl Key {
    /// History direction for the arrow keys, `None` for the rest.
    pub fn history_direction(self) -> Option<HistoryDirection> {
        match self {
            Key::Up => Some(HistoryDirection::Up),
            Key::Down => Some(HistoryDirection::Down),
            _ => None,
        }
    }
}
