//! Content generation endpoints.
//!
//! POST /api/generate/comment   { comment }
//! POST /api/generate/photo     { photoDataUri }
//! POST /api/generate/improve   { existingPost, desiredStyle, postId?, postType? }
//!
//! Each returns the publishable content `{ title, body, tags, postId?, postType }`.

use axum::{extract::Extension, Json};
use serde::Deserialize;
use wordpress_client::{CollectionKind, Content};

use crate::domains::generation::actions;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    comment: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoInput {
    #[serde(default)]
    photo_data_uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveInput {
    #[serde(default)]
    existing_post: String,
    #[serde(default)]
    desired_style: String,
    post_id: Option<String>,
    #[serde(default)]
    post_type: CollectionKind,
}

pub async fn generate_comment_handler(
    Extension(state): Extension<AxumAppState>,
    Json(input): Json<CommentInput>,
) -> Result<Json<Content>, ApiError> {
    let content = actions::generate_from_comment(&input.comment, &state.server_deps).await?;
    Ok(Json(content))
}

pub async fn generate_photo_handler(
    Extension(state): Extension<AxumAppState>,
    Json(input): Json<PhotoInput>,
) -> Result<Json<Content>, ApiError> {
    let content = actions::generate_from_photo(&input.photo_data_uri, &state.server_deps).await?;
    Ok(Json(content))
}

pub async fn improve_handler(
    Extension(state): Extension<AxumAppState>,
    Json(input): Json<ImproveInput>,
) -> Result<Json<Content>, ApiError> {
    let content = actions::improve_post(
        &input.existing_post,
        &input.desired_style,
        input.post_id,
        input.post_type,
        &state.server_deps,
    )
    .await?;
    Ok(Json(content))
}
