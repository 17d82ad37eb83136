use crate::cursor::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    Move(Direction),
    DeleteChar,
    InsertChar(char),
}
