// ui/frame.rs - Renderable snapshot of one editor loop iteration

/// Everything needed to paint one screen: document lines (already clipped to
/// the viewport), the status line, and where the cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub visible_lines: Vec<String>,
    pub status_text: String,
    /// `(row, col)` relative to the top-left of the screen. May lie outside
    /// the drawable area when the cursor is below the window or past the
    /// right edge.
    pub cursor_screen_pos: (usize, usize),
    /// Screen row reserved for the status line.
    pub status_row: usize,
}

/// First `max_chars` characters of `text`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
