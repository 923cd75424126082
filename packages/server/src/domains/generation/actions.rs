//! Content generation actions - entry-point functions called from HTTP routes.
//!
//! Actions validate raw input, drive the content generator and hand back
//! publishable `Content`. Generator failures are logged here and replaced
//! by a user-facing message.

use thiserror::Error;
use tracing::{error, info};
use wordpress_client::{CollectionKind, Content};

use super::models::PhotoSuggestions;
use crate::kernel::ServerDeps;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    EmptyInput(&'static str),

    #[error("Photo must be a base64 data URI (data:<mimetype>;base64,<data>).")]
    InvalidPhoto,

    #[error("{0}")]
    Failed(&'static str),
}

/// Write a post from a user comment.
pub async fn generate_from_comment(
    comment: &str,
    deps: &ServerDeps,
) -> Result<Content, GenerationError> {
    if comment.trim().is_empty() {
        return Err(GenerationError::EmptyInput("Comment cannot be empty."));
    }

    info!(comment_len = comment.len(), "Generating content from comment");

    deps.content_generator
        .generate_from_comment(comment)
        .await
        .map(|post| post.into_content())
        .map_err(|e| {
            error!(error = %e, "Error generating content from comment");
            GenerationError::Failed("Failed to generate content. Please try again.")
        })
}

/// Write a post about a photo: analyse it first, then write from the analysis.
pub async fn generate_from_photo(
    photo_data_uri: &str,
    deps: &ServerDeps,
) -> Result<Content, GenerationError> {
    if photo_data_uri.trim().is_empty() {
        return Err(GenerationError::EmptyInput("Photo data cannot be empty."));
    }
    if !is_base64_data_uri(photo_data_uri) {
        return Err(GenerationError::InvalidPhoto);
    }

    info!(photo_len = photo_data_uri.len(), "Generating content from photo");

    let failed = |e: anyhow::Error| {
        error!(error = %e, "Error generating content from photo");
        GenerationError::Failed("Failed to generate content from the photo. Please try again.")
    };

    let suggestions = deps
        .content_generator
        .analyze_photo(photo_data_uri)
        .await
        .map_err(failed)?;

    let brief = compose_photo_brief(&suggestions);
    deps.content_generator
        .generate_from_comment(&brief)
        .await
        .map(|post| post.into_content())
        .map_err(failed)
}

/// Rewrite an existing post. `post_id`/`post_type` ride along so the result
/// publishes as an update of the original.
pub async fn improve_post(
    existing_post: &str,
    desired_style: &str,
    post_id: Option<String>,
    post_type: CollectionKind,
    deps: &ServerDeps,
) -> Result<Content, GenerationError> {
    if existing_post.trim().is_empty() || desired_style.trim().is_empty() {
        return Err(GenerationError::EmptyInput(
            "Existing post and desired style cannot be empty.",
        ));
    }

    info!(
        post_id = post_id.as_deref().unwrap_or(""),
        post_type = post_type.path(),
        "Improving existing post"
    );

    deps.content_generator
        .improve_post(existing_post, desired_style)
        .await
        .map(|post| post.into_update(post_id, post_type))
        .map_err(|e| {
            error!(error = %e, "Error improving post");
            GenerationError::Failed("Failed to improve post. Please try again.")
        })
}

/// Brief handed to the comment generator after photo analysis.
pub fn compose_photo_brief(suggestions: &PhotoSuggestions) -> String {
    format!(
        "Based on an analysis of a provided image, please generate a blog post.\n\
         \n\
         Key themes and topics identified from the image:\n\
         {}\n\
         \n\
         Specific content ideas to explore:\n\
         {}\n\
         \n\
         Use these points as inspiration to write a compelling and relevant blog post with a title, body, and tags.",
        bullet_list(&suggestions.suggested_topics),
        bullet_list(&suggestions.content_ideas),
    )
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `data:<mime>;base64,<payload>` with a non-empty payload.
fn is_base64_data_uri(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:") else {
        return false;
    };
    match rest.split_once(";base64,") {
        Some((mime, payload)) => !mime.is_empty() && !payload.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_photo_brief() {
        let brief = compose_photo_brief(&PhotoSuggestions {
            suggested_topics: vec!["Hiking".into(), "Autumn".into()],
            content_ideas: vec!["Best fall trails".into()],
        });

        assert!(brief.contains("- Hiking\n- Autumn"));
        assert!(brief.contains("Specific content ideas to explore:\n- Best fall trails"));
        assert!(brief.ends_with("with a title, body, and tags."));
    }

    #[test]
    fn test_is_base64_data_uri() {
        assert!(is_base64_data_uri("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_base64_data_uri("https://example.com/cat.png"));
        assert!(!is_base64_data_uri("data:image/png,raw"));
        assert!(!is_base64_data_uri("data:;base64,abc"));
        assert!(!is_base64_data_uri("data:image/png;base64,"));
    }
}
