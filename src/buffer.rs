use crate::config::CursorPolicy;
use crate::cursor::{Cursor, Direction};

/// Document text as a list of lines plus a single cursor.
///
/// `lines` is never empty and `cursor.row` always indexes into it. The cursor
/// column may run past the end of its line depending on the [`CursorPolicy`].
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
    policy: CursorPolicy,
    modified: bool,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::load("")
    }

    /// Split `text` on `\n`, `\r\n` or a lone `\r`. A trailing break does not
    /// start a new line; empty input yields a single empty line.
    pub fn load(text: &str) -> Self {
        let mut lines = split_lines(text);
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: Cursor::new(),
            policy: CursorPolicy::default(),
            modified: false,
        }
    }

    pub fn with_policy(mut self, policy: CursorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Join lines with `\n` and terminate with one trailing `\n`.
    pub fn serialize(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Splice `ch` in at the cursor and advance one column. A column past the
    /// end of the line appends.
    pub fn insert_char(&mut self, ch: char) {
        let Cursor { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let offset = byte_offset(line, col);
        line.insert(offset, ch);
        self.cursor.col += 1;
        self.modified = true;
    }

    /// Remove the character before the cursor. No-op at column 0; lines are
    /// never joined.
    pub fn delete_char(&mut self) {
        let Cursor { row, col } = self.cursor;
        if col == 0 {
            return;
        }
        let line = &mut self.lines[row];
        if col - 1 < line.chars().count() {
            let offset = byte_offset(line, col - 1);
            line.remove(offset);
            self.modified = true;
        }
        self.cursor.col -= 1;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.clamp_col_after_vertical_move();
                }
            }
            Direction::Down => {
                if self.cursor.row < self.lines.len() - 1 {
                    self.cursor.row += 1;
                    self.clamp_col_after_vertical_move();
                }
            }
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                }
            }
            Direction::Right => {
                if !self.policy.clamp_right_at_line_end
                    || self.cursor.col < self.line_len(self.cursor.row)
                {
                    self.cursor.col += 1;
                }
            }
        }
    }

    fn clamp_col_after_vertical_move(&mut self) {
        if self.policy.clamp_col_on_vertical_move {
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
        }
    }
}

impl TextBuffer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of a line in characters; 0 for rows past the end.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, |line| line.chars().count())
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Place the cursor, keeping it inside the document.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.lines.len() - 1);
        self.cursor = Cursor {
            row,
            col: col.min(self.line_len(row)),
        };
    }

    pub fn policy(&self) -> CursorPolicy {
        self.policy
    }

    pub fn modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\n' => {
                lines.push(text[start..idx].to_string());
                start = idx + 1;
            }
            '\r' => {
                lines.push(text[start..idx].to_string());
                start = idx + 1;
                if let Some(&(next, '\n')) = chars.peek() {
                    chars.next();
                    start = next + 1;
                }
            }
            _ => {}
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(offset, _)| offset)
}
