//! WordPress endpoints.
//!
//! Credentials (`wpUrl`, `wpUsername`, `wpAppPassword`) travel in the POST
//! body of every call so they stay out of URLs and access logs.

use axum::{extract::Extension, Json};
use wordpress_client::{PublishResult, RemotePost};

use crate::domains::publishing::{actions, FetchRequest, PublishRequest, SearchRequest};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// POST /api/wordpress/publish -> `{ postUrl, postId }`
pub async fn publish_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResult>, ApiError> {
    let result =
        actions::publish_content(&request.content, &request.site, &state.server_deps).await?;
    Ok(Json(result))
}

/// POST /api/wordpress/search -> `[{ id, title, content, excerpt }]`
pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<RemotePost>>, ApiError> {
    let posts = actions::search_posts(
        &request.query,
        request.post_type,
        &request.site,
        &state.server_deps,
    )
    .await?;
    Ok(Json(posts))
}

/// POST /api/wordpress/fetch -> `{ id, title, content, excerpt }`
pub async fn fetch_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<FetchRequest>,
) -> Result<Json<RemotePost>, ApiError> {
    let post = actions::fetch_post(
        &request.id,
        request.post_type,
        &request.site,
        &state.server_deps,
    )
    .await?;
    Ok(Json(post))
}
