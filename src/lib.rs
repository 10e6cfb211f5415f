// Editing core
pub mod model;
pub mod primitives;
pub mod search;

// Editor and its collaborators
pub mod config;
pub mod editor;
pub mod input;
pub mod services;
pub mod view;
