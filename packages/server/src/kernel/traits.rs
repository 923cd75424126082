// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Input validation and prompt composition live in domains/generation/actions.rs.
//
// Naming convention: Base* for trait names (e.g., BaseContentGenerator)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::generation::{GeneratedPost, PhotoSuggestions};

// =============================================================================
// Content Generator Trait (Infrastructure - AI prompt execution)
// =============================================================================

#[async_trait]
pub trait BaseContentGenerator: Send + Sync {
    /// Write a post (title, body, tags) from a free-form comment or brief
    async fn generate_from_comment(&self, comment: &str) -> Result<GeneratedPost>;

    /// Suggest topics and content ideas for a photo given as a base64 data URI
    async fn analyze_photo(&self, photo_data_uri: &str) -> Result<PhotoSuggestions>;

    /// Rewrite an existing post in the desired style, with a new title and tags
    async fn improve_post(&self, existing_post: &str, desired_style: &str)
        -> Result<GeneratedPost>;
}
