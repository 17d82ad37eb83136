// ui/status_bar.rs - Status line text

use std::path::Path;

use crate::cursor::Cursor;

/// Shown in place of a file name for a document that has never been saved.
pub const NEW_DOCUMENT_MARKER: &str = "[new]";

/// Appended to the file name while there are unsaved edits.
pub const MODIFIED_MARKER: &str = " [+]";

/// ` <file>[ [+]] | Ln <row> Col <col> ` with 1-based row and column.
pub fn status_text(source_path: Option<&Path>, cursor: Cursor, modified: bool) -> String {
    let name = source_path.map_or_else(
        || NEW_DOCUMENT_MARKER.to_string(),
        |path| path.display().to_string(),
    );
    let marker = if modified { MODIFIED_MARKER } else { "" };
    format!(
        " {}{} | Ln {} Col {} ",
        name,
        marker,
        cursor.row + 1,
        cursor.col + 1
    )
}
