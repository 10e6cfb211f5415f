//! View layer
//!
//! Everything that turns editor state into terminal output.

pub mod compositor;
pub mod prompt;
pub mod status_bar;
pub mod theme;
pub mod viewport;
