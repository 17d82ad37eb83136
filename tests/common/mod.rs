// Common test utilities: scripted input and a screen that records calls

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use scribe::buffer::TextBuffer;
use scribe::keymap::KeyEvent;
use scribe::ui::{InputSource, Screen};

/// Replays a fixed list of key events, then keeps answering `Quit` so a
/// session loop always terminates.
pub struct ScriptedInput {
    events: VecDeque<KeyEvent>,
    pub delivered: usize,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            delivered: 0,
        }
    }

    /// Type every character of `text` as a printable key.
    pub fn typing(text: &str) -> Vec<KeyEvent> {
        text.chars().map(KeyEvent::Printable).collect()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<KeyEvent> {
        self.delivered += 1;
        Ok(self.events.pop_front().unwrap_or(KeyEvent::Quit))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOp {
    Clear,
    Write {
        row: usize,
        col: usize,
        text: String,
        reverse: bool,
    },
    SetCursor(usize, usize),
    Refresh,
}

/// Fixed-size screen that logs every call.
pub struct RecordingScreen {
    pub height: usize,
    pub width: usize,
    pub ops: Vec<ScreenOp>,
}

impl RecordingScreen {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ops: Vec::new(),
        }
    }

    /// Operations of the most recent render, from its `Clear` onwards.
    pub fn last_render(&self) -> &[ScreenOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == ScreenOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    pub fn render_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == ScreenOp::Refresh).count()
    }
}

impl Screen for RecordingScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::Clear);
        Ok(())
    }

    fn write_text(&mut self, row: usize, col: usize, text: &str, reverse: bool) -> io::Result<()> {
        self.ops.push(ScreenOp::Write {
            row,
            col,
            text: text.to_string(),
            reverse,
        });
        Ok(())
    }

    fn set_cursor(&mut self, row: usize, col: usize) -> io::Result<()> {
        self.ops.push(ScreenOp::SetCursor(row, col));
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::Refresh);
        Ok(())
    }

    fn get_viewport_size(&self) -> io::Result<(usize, usize)> {
        Ok((self.height, self.width))
    }
}

/// Validation utilities for checking invariants
pub mod validation {
    use super::*;

    /// Assert buffer invariants (line count >= 1, cursor row in range)
    pub fn assert_buffer_invariants(buffer: &TextBuffer) {
        assert!(buffer.line_count() >= 1, "Buffer must have at least 1 line");
        assert!(
            buffer.cursor().row < buffer.line_count(),
            "Cursor row {} out of bounds (line_count: {})",
            buffer.cursor().row,
            buffer.line_count()
        );
    }
}
