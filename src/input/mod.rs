//! Input decoding
//!
//! Turns crossterm key events into editing events for the [`crate::editor::Editor`].

pub mod keybindings;
