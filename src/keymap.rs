// keymap.rs - Terminal events to editor key events to commands

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::command::Command;
use crate::cursor::Direction;

/// Input event as seen by the editor, independent of terminal key encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Quit,
    Save,
    Arrow(Direction),
    Erase,
    Printable(char),
    Other,
}

impl KeyEvent {
    /// Decode a crossterm event. Only key presses are meaningful; releases,
    /// repeats, resizes, mouse and paste events all become `Other`.
    pub fn from_terminal(event: &Event) -> Self {
        let Event::Key(key) = event else {
            return KeyEvent::Other;
        };
        if key.kind != KeyEventKind::Press {
            return KeyEvent::Other;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'q' => KeyEvent::Quit,
                's' => KeyEvent::Save,
                _ => KeyEvent::Other,
            },
            KeyCode::Up => KeyEvent::Arrow(Direction::Up),
            KeyCode::Down => KeyEvent::Arrow(Direction::Down),
            KeyCode::Left => KeyEvent::Arrow(Direction::Left),
            KeyCode::Right => KeyEvent::Arrow(Direction::Right),
            KeyCode::Backspace | KeyCode::Char('\x7f') => KeyEvent::Erase,
            KeyCode::Char(c) if !alt && is_printable(c) => KeyEvent::Printable(c),
            _ => KeyEvent::Other,
        }
    }

    pub fn to_command(self) -> Option<Command> {
        match self {
            KeyEvent::Quit => Some(Command::Quit),
            KeyEvent::Save => Some(Command::Save),
            KeyEvent::Arrow(direction) => Some(Command::Move(direction)),
            KeyEvent::Erase => Some(Command::DeleteChar),
            KeyEvent::Printable(c) => Some(Command::InsertChar(c)),
            KeyEvent::Other => None,
        }
    }
}

/// Printable ASCII, space through tilde.
pub fn is_printable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}
