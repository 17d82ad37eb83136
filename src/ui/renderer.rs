// ui/renderer.rs - Paints a frame onto a screen

use std::io;

use crate::ui::frame::Frame;
use crate::ui::screen::Screen;

/// Paint `frame` in a fixed order: clear, document lines, status line in
/// reverse video, cursor, refresh.
pub fn draw<S: Screen + ?Sized>(frame: &Frame, screen: &mut S) -> io::Result<()> {
    screen.clear()?;
    for (row, line) in frame.visible_lines.iter().enumerate() {
        screen.write_text(row, 0, line, false)?;
    }
    screen.write_text(frame.status_row, 0, &frame.status_text, true)?;
    let (row, col) = frame.cursor_screen_pos;
    screen.set_cursor(row, col)?;
    screen.refresh()
}
