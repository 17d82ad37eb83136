use std::fs;
use std::path::Path;

use crate::error::EditorError;

pub fn read_text(path: &Path) -> Result<String, EditorError> {
    fs::read_to_string(path).map_err(|source| EditorError::FileNotReadable {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_text(path: &Path, text: &str) -> Result<(), EditorError> {
    fs::write(path, text).map_err(|source| EditorError::FileNotWritable {
        path: path.to_path_buf(),
        source,
    })
}
