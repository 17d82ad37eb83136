/// How far the cursor column is allowed to drift past the end of a line.
///
/// Both knobs are off by default: right-arrow keeps moving past the line end
/// and vertical moves keep the column as-is, even when the destination line
/// is shorter. Buffer edits at such a column are still well-defined (see
/// [`crate::buffer::TextBuffer::insert_char`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPolicy {
    /// Stop `Right` at the end of the current line.
    pub clamp_right_at_line_end: bool,
    /// Pull the column back to the destination line length on `Up`/`Down`.
    pub clamp_col_on_vertical_move: bool,
}

impl CursorPolicy {
    pub const UNCLAMPED: Self = Self {
        clamp_right_at_line_end: false,
        clamp_col_on_vertical_move: false,
    };

    pub const CLAMPED: Self = Self {
        clamp_right_at_line_end: true,
        clamp_col_on_vertical_move: true,
    };
}

pub const DEFAULT_CURSOR_POLICY: CursorPolicy = CursorPolicy::UNCLAMPED;

impl Default for CursorPolicy {
    fn default() -> Self {
        DEFAULT_CURSOR_POLICY
    }
}
