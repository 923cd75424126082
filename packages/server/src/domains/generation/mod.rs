//! Content generation: comment, photo and rewrite flows over the AI collaborator.

pub mod actions;
pub mod models;

pub use actions::GenerationError;
pub use models::{GeneratedPost, PhotoSuggestions};
