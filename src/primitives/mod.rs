//! Low-level primitives
//!
//! Tab expansion, syntax profiles and the row highlighter.

pub mod highlighter;
pub mod render_transform;
pub mod syntax;
