//! Collaborators outside the editing core: files, the clipboard and the terminal

pub mod clipboard;
pub mod fs;
pub mod terminal_modes;
