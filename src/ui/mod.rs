// ui/mod.rs - UI module definitions

pub mod frame;
pub mod renderer;
pub mod screen;
pub mod status_bar;
pub mod terminal;

// Re-export commonly used types
pub use frame::Frame;
pub use screen::{InputSource, Screen};
pub use terminal::{TerminalInput, TerminalSession};
