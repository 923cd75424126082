//! WordPress actions - entry-point functions called from HTTP routes.
//!
//! Credentials come from the request and are never stored or logged.
//! Failures are returned as-is; presentation is the route's job.

use tracing::info;
use wordpress_client::{CollectionKind, Content, PublishResult, RemotePost, Result};

use super::models::SiteConnection;
use crate::kernel::ServerDeps;

/// Create or update `content` on the connected site.
pub async fn publish_content(
    content: &Content,
    site: &SiteConnection,
    deps: &ServerDeps,
) -> Result<PublishResult> {
    let client = deps.wordpress(&site.credentials())?;

    let result = client.publish(content).await?;
    let action = if content.target().is_some() {
        "edition"
    } else {
        "creation"
    };
    info!(
        site = client.base_url(),
        post_id = result.post_id,
        action,
        "WordPress content published"
    );
    Ok(result)
}

/// Search published posts or pages on the connected site.
pub async fn search_posts(
    query: &str,
    kind: CollectionKind,
    site: &SiteConnection,
    deps: &ServerDeps,
) -> Result<Vec<RemotePost>> {
    let client = deps.wordpress(&site.credentials())?;

    let results = client.search(query, kind).await?;
    info!(site = client.base_url(), count = results.len(), "WordPress search completed");
    Ok(results)
}

/// Load one post or page so it can be rewritten.
pub async fn fetch_post(
    id: &str,
    kind: CollectionKind,
    site: &SiteConnection,
    deps: &ServerDeps,
) -> Result<RemotePost> {
    let client = deps.wordpress(&site.credentials())?;
    client.get_by_id(id, kind).await
}
