// Cursor bounds tests for both cursor policies

mod common;
use common::validation;

use scribe::buffer::TextBuffer;
use scribe::config::{CursorPolicy, DEFAULT_CURSOR_POLICY};
use scribe::cursor::{Cursor, Direction};

#[test]
fn test_default_policy_is_unclamped() {
    assert_eq!(DEFAULT_CURSOR_POLICY, CursorPolicy::UNCLAMPED);
    assert_eq!(TextBuffer::new().policy(), CursorPolicy::UNCLAMPED);
}

/// Right-arrow keeps counting past the end of the line by default
#[test]
fn test_right_is_unbounded_by_default() {
    let mut buffer = TextBuffer::load("abc");
    for _ in 0..10 {
        buffer.move_cursor(Direction::Right);
    }
    assert_eq!(buffer.cursor().col, 10);
    validation::assert_buffer_invariants(&buffer);
}

#[test]
fn test_left_stops_at_zero() {
    let mut buffer = TextBuffer::load("abc");
    buffer.move_cursor(Direction::Left);
    assert_eq!(buffer.cursor().col, 0);
}

#[test]
fn test_up_stops_at_first_line() {
    let mut buffer = TextBuffer::load("a\nb");
    buffer.move_cursor(Direction::Up);
    assert_eq!(buffer.cursor().row, 0);
}

/// Moving to a shorter line keeps the column unless the policy clamps it
#[test]
fn test_cursor_across_varying_line_lengths() {
    let text = "a\nbbbbbbbb\ncc";

    let mut unclamped = TextBuffer::load(text);
    unclamped.set_cursor(1, 8);
    unclamped.move_cursor(Direction::Down);
    assert_eq!(unclamped.cursor(), Cursor { row: 2, col: 8 });
    unclamped.move_cursor(Direction::Up);
    unclamped.move_cursor(Direction::Up);
    assert_eq!(unclamped.cursor(), Cursor { row: 0, col: 8 });

    let mut clamped = TextBuffer::load(text).with_policy(CursorPolicy::CLAMPED);
    clamped.set_cursor(1, 8);
    clamped.move_cursor(Direction::Down);
    assert_eq!(clamped.cursor(), Cursor { row: 2, col: 2 });
    clamped.move_cursor(Direction::Up);
    assert_eq!(clamped.cursor(), Cursor { row: 1, col: 2 });
}

/// Edits at a column beyond the line end never panic
#[test]
fn test_edits_past_line_end() {
    let mut buffer = TextBuffer::load("long line\nab");
    buffer.set_cursor(0, 9);
    buffer.move_cursor(Direction::Down);
    assert_eq!(buffer.cursor(), Cursor { row: 1, col: 9 });

    buffer.insert_char('c');
    assert_eq!(buffer.lines()[1], "abc");
    assert_eq!(buffer.cursor().col, 10);

    for _ in 0..20 {
        buffer.delete_char();
        validation::assert_buffer_invariants(&buffer);
    }
    assert_eq!(buffer.lines()[1], "");
    assert_eq!(buffer.cursor().col, 0);
    assert_eq!(buffer.lines()[0], "long line");
}

#[test]
fn test_rapid_vertical_navigation() {
    let mut buffer = TextBuffer::load("1\n22\n333\n4444\n55555");
    for _ in 0..50 {
        buffer.move_cursor(Direction::Down);
        validation::assert_buffer_invariants(&buffer);
    }
    assert_eq!(buffer.cursor().row, 4);
    for _ in 0..50 {
        buffer.move_cursor(Direction::Up);
        validation::assert_buffer_invariants(&buffer);
    }
    assert_eq!(buffer.cursor().row, 0);
}
