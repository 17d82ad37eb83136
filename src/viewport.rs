use std::ops::Range;

/// Vertical window into the buffer. `scroll_row` is the first document line
/// shown at the top of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_row: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self { scroll_row: 0 }
    }

    /// Scroll up so that `cursor_row` is not above the window. There is no
    /// matching downward scroll; a cursor below the window stays off-screen.
    pub fn follow_cursor(&mut self, cursor_row: usize) {
        if cursor_row < self.scroll_row {
            self.scroll_row = cursor_row;
        }
    }

    /// Document rows drawn into `text_rows` screen rows for a buffer of
    /// `line_count` lines.
    pub fn visible_range(&self, line_count: usize, text_rows: usize) -> Range<usize> {
        let start = self.scroll_row.min(line_count);
        let end = self.scroll_row.saturating_add(text_rows).min(line_count);
        start..end
    }
}
