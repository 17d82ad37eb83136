// ui/terminal.rs - Crossterm/ratatui terminal session

use crossterm::{
    event::read,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use std::io::{self, Stdout};

use crate::keymap::KeyEvent;
use crate::ui::screen::{InputSource, Screen};

/// Owns the terminal while the editor runs. Raw mode and the alternate
/// screen are entered on construction and restored on drop, so every exit
/// path (including `?` and unwinding panics) leaves the shell usable.
///
/// Drawing is staged into an off-screen ratatui buffer and flushed by
/// [`Screen::refresh`].
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    staged: Buffer,
    cursor: Option<(u16, u16)>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        // From here on Drop takes care of restoring the terminal.
        let mut session = Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
            staged: Buffer::empty(Rect::default()),
            cursor: None,
        };
        session.terminal.clear()?;
        log::debug!("terminal session started");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.terminal.show_cursor() {
            log::warn!("failed to show cursor: {}", e);
        }
        if let Err(e) = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            log::warn!("failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            log::warn!("failed to disable raw mode: {}", e);
        }
        log::debug!("terminal session restored");
    }
}

impl Screen for TerminalSession {
    fn clear(&mut self) -> io::Result<()> {
        self.staged = Buffer::empty(self.terminal.size()?);
        self.cursor = None;
        Ok(())
    }

    fn write_text(&mut self, row: usize, col: usize, text: &str, reverse: bool) -> io::Result<()> {
        let area = self.staged.area;
        let (Ok(y), Ok(x)) = (u16::try_from(row), u16::try_from(col)) else {
            return Ok(());
        };
        if y >= area.height || x >= area.width {
            return Ok(());
        }
        let style = if reverse {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let max_width = usize::from(area.width - x);
        self.staged.set_stringn(x, y, text, max_width, style);
        Ok(())
    }

    fn set_cursor(&mut self, row: usize, col: usize) -> io::Result<()> {
        // Positions outside the screen leave the hardware cursor hidden.
        self.cursor = match (u16::try_from(row), u16::try_from(col)) {
            (Ok(y), Ok(x)) if y < self.staged.area.height && x < self.staged.area.width => {
                Some((y, x))
            }
            _ => None,
        };
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        let staged = &self.staged;
        let cursor = self.cursor;
        self.terminal.draw(|f| {
            let area = f.size().intersection(staged.area);
            let buf = f.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    *buf.get_mut(x, y) = staged.get(x, y).clone();
                }
            }
            if let Some((row, col)) = cursor {
                if row < area.height && col < area.width {
                    f.set_cursor(col, row);
                }
            }
        })?;
        Ok(())
    }

    fn get_viewport_size(&self) -> io::Result<(usize, usize)> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok((usize::from(rows), usize::from(cols)))
    }
}

/// Blocking reader of crossterm key events. Only meaningful while a
/// [`TerminalSession`] holds the terminal in raw mode.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> io::Result<KeyEvent> {
        let event = read()?;
        let key = KeyEvent::from_terminal(&event);
        if key == KeyEvent::Other {
            log::trace!("ignored terminal event: {:?}", event);
        }
        Ok(key)
    }
}
