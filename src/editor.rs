// src/editor.rs - Editor session: buffer, viewport and the main loop

use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;
use crate::command::Command;
use crate::error::EditorError;
use crate::keymap::KeyEvent;
use crate::storage;
use crate::ui::frame::{Frame, truncate};
use crate::ui::renderer;
use crate::ui::screen::{InputSource, Screen};
use crate::ui::status_bar::status_text;
use crate::viewport::Viewport;

pub struct EditorSession {
    buffer: TextBuffer,
    viewport: Viewport,
    running: bool,
    source_path: Option<PathBuf>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Empty, unsaved document.
    pub fn new() -> Self {
        Self::with_buffer(TextBuffer::new(), None)
    }

    pub fn with_buffer(buffer: TextBuffer, source_path: Option<PathBuf>) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(),
            running: true,
            source_path,
        }
    }

    /// Load `path` into a new session. Fails if the file cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let text = storage::read_text(path)?;
        let buffer = TextBuffer::load(&text);
        log::info!("opened {} ({} lines)", path.display(), buffer.line_count());
        Ok(Self::with_buffer(buffer, Some(path.to_path_buf())))
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn scroll_row(&self) -> usize {
        self.viewport.scroll_row
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Compute the frame for a `height` x `width` screen. The bottom row is
    /// the status line; everything is clipped to `width - 1` columns.
    pub fn render_frame(&mut self, height: usize, width: usize) -> Frame {
        let cursor = self.buffer.cursor();
        self.viewport.follow_cursor(cursor.row);

        let text_rows = height.saturating_sub(1);
        let max_cols = width.saturating_sub(1);
        let visible_lines = self
            .viewport
            .visible_range(self.buffer.line_count(), text_rows)
            .map(|idx| truncate(&self.buffer.lines()[idx], max_cols))
            .collect();

        let status = status_text(self.source_path(), cursor, self.buffer.modified());

        Frame {
            visible_lines,
            status_text: truncate(&status, max_cols),
            cursor_screen_pos: (cursor.row - self.viewport.scroll_row, cursor.col),
            status_row: text_rows,
        }
    }

    /// Apply one key event. Unmapped events are ignored.
    pub fn handle_event(&mut self, event: KeyEvent) -> Result<(), EditorError> {
        match event.to_command() {
            Some(cmd) => self.execute_command(cmd),
            None => {
                log::trace!("ignored key event {:?}", event);
                Ok(())
            }
        }
    }

    pub fn execute_command(&mut self, cmd: Command) -> Result<(), EditorError> {
        log::debug!("execute {:?}", cmd);
        match cmd {
            Command::Quit => self.running = false,
            Command::Save => self.save()?,
            Command::Move(direction) => self.buffer.move_cursor(direction),
            Command::DeleteChar => self.buffer.delete_char(),
            Command::InsertChar(c) => self.buffer.insert_char(c),
        }
        Ok(())
    }

    /// Write the buffer to its source path. Without a path this does nothing.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let Some(path) = self.source_path.as_deref() else {
            log::debug!("save requested for unnamed document; nothing written");
            return Ok(());
        };
        storage::write_text(path, &self.buffer.serialize())?;
        log::info!("saved {} ({} lines)", path.display(), self.buffer.line_count());
        self.buffer.mark_saved();
        Ok(())
    }

    /// Render, wait for one event, handle it; repeat until quit.
    pub fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<(), EditorError>
    where
        I: InputSource + ?Sized,
        S: Screen + ?Sized,
    {
        while self.running {
            let (height, width) = screen.get_viewport_size()?;
            let frame = self.render_frame(height, width);
            renderer::draw(&frame, screen)?;
            let event = input.next_event()?;
            self.handle_event(event)?;
        }
        Ok(())
    }
}
