//! Document model: rows, positions and the selection

pub mod document;
pub mod position;
pub mod row;
pub mod selection;
