//! tsk library - core task store, command parsing, and the interactive loop

pub mod command;
pub mod store;
pub mod tui;
