// lib.rs - Library root for the scribe editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod keymap;
pub mod storage;
pub mod ui;
pub mod viewport;
