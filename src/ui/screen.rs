// ui/screen.rs - Output and input collaborator contracts

use std::io;

use crate::keymap::KeyEvent;

/// A character-cell display. Rows and columns are zero-based screen
/// coordinates; writes outside the display are clipped.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
    fn write_text(&mut self, row: usize, col: usize, text: &str, reverse: bool) -> io::Result<()>;
    fn set_cursor(&mut self, row: usize, col: usize) -> io::Result<()>;
    fn refresh(&mut self) -> io::Result<()>;
    /// `(height, width)` in cells.
    fn get_viewport_size(&self) -> io::Result<(usize, usize)>;
}

/// Blocking source of key events.
pub trait InputSource {
    fn next_event(&mut self) -> io::Result<KeyEvent>;
}
