//! WordPress REST API client.
//!
//! Publishes posts and pages through `/wp-json/wp/v2`, authenticating with
//! an application password over HTTP Basic auth. Tag names are resolved to
//! ids (creating missing tags) on the way.
//!
//! # Example
//!
//! ```rust,ignore
//! use wordpress_client::{Content, SiteCredentials, WordPressClient};
//!
//! let client = WordPressClient::new(&SiteCredentials::new(
//!     "example.com/wp-admin",
//!     "editor",
//!     "abcd efgh ijkl mnop",
//! ))?;
//!
//! let published = client
//!     .publish(&Content {
//!         title: "Hello".into(),
//!         body: "<p>World</p>".into(),
//!         tags: vec!["news".into()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} -> {}", published.post_id, published.post_url);
//! ```
//!
//! Nothing is retried or cached. Each call is a single request/response
//! exchange (plus tag lookups for publish).

pub mod error;
pub mod tags;
pub mod types;
pub mod url;

pub use error::{Result, WordPressError};
pub use types::{
    CollectionKind, Content, PublishResult, Rendered, RemotePost, SiteCredentials, Tag,
};
pub use url::normalize_site_url;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use types::PublishBody;

/// Fields requested for search and get responses.
const REMOTE_POST_FIELDS: &str = "id,title,content,excerpt";

/// Client bound to a single WordPress site and user.
#[derive(Clone)]
pub struct WordPressClient {
    http_client: Client,
    base_url: String,
    username: String,
    application_password: String,
}

impl WordPressClient {
    /// Create a client for the given site. Fails if any credential is blank.
    pub fn new(credentials: &SiteCredentials) -> Result<Self> {
        Self::with_http_client(Client::new(), credentials)
    }

    /// Create a client reusing an existing `reqwest::Client` (connection pool, proxy, ...).
    pub fn with_http_client(http_client: Client, credentials: &SiteCredentials) -> Result<Self> {
        credentials.validate()?;

        Ok(Self {
            http_client,
            base_url: normalize_site_url(&credentials.site_url),
            username: credentials.username.clone(),
            application_password: credentials.application_password.clone(),
        })
    }

    /// Normalized site URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/wp-json/wp/v2/{path}`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/wp-json/wp/v2/{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http_client
            .get(url)
            .basic_auth(&self.username, Some(&self.application_password))
            .header(header::CONTENT_TYPE, "application/json")
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.http_client
            .post(url)
            .basic_auth(&self.username, Some(&self.application_password))
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// Create or update a post/page and publish it.
    ///
    /// With `content.target_id` set the request goes to `{collection}/{id}`
    /// (update), otherwise to `{collection}` (create). Both use POST.
    /// The target must be a numeric id; anything else fails before any request.
    /// Tags are only sent for posts, and only when at least one resolved.
    pub async fn publish(&self, content: &Content) -> Result<PublishResult> {
        let collection = content.kind.path();
        let target = content.target().map(parse_id).transpose()?;
        let url = match target {
            Some(id) => self.endpoint(&format!("{}/{}", collection, id)),
            None => self.endpoint(collection),
        };

        let mut body = PublishBody {
            title: &content.title,
            content: &content.body,
            status: "publish",
            tags: None,
        };

        if content.kind == CollectionKind::Posts && !content.tags.is_empty() {
            let tag_ids = self.resolve_tags(&content.tags).await;
            if !tag_ids.is_empty() {
                body.tags = Some(tag_ids);
            }
        }

        info!(
            collection,
            update = target.is_some(),
            tag_count = body.tags.as_ref().map_or(0, Vec::len),
            "Publishing to WordPress"
        );
        debug!(url = %url, "WordPress publish request");

        let response = self.post(&url).json(&body).send().await.map_err(|e| {
            warn!(error = %e, "WordPress publish request failed");
            WordPressError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        let value = classify_response(status, &text)?;

        let link = value.get("link").and_then(Value::as_str);
        let id = value.get("id").and_then(Value::as_u64);

        match (link, id) {
            (Some(link), Some(id)) => {
                info!(post_id = id, post_url = link, "Published to WordPress");
                Ok(PublishResult {
                    post_url: link.to_string(),
                    post_id: id,
                })
            }
            (None, _) => Err(WordPressError::AmbiguousSuccess("link")),
            (_, None) => Err(WordPressError::AmbiguousSuccess("id")),
        }
    }

    /// Full-text search over published items of one collection.
    ///
    /// Returns whatever fits in the first page the site sends back.
    pub async fn search(&self, query: &str, kind: CollectionKind) -> Result<Vec<RemotePost>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WordPressError::InvalidInput(
                "search query cannot be empty".into(),
            ));
        }

        let url = self.endpoint(kind.path());
        info!(collection = kind.path(), query, "Searching WordPress");

        let request = self.get(&url).query(&[
            ("search", query),
            ("status", "publish"),
            ("_fields", REMOTE_POST_FIELDS),
        ]);
        let posts: Vec<RemotePost> = self.fetch_json(request).await?;

        debug!(count = posts.len(), "WordPress search results");
        Ok(posts)
    }

    /// Fetch one post/page by numeric id.
    pub async fn get_by_id(&self, id: &str, kind: CollectionKind) -> Result<RemotePost> {
        let id = parse_id(id)?;

        let url = self.endpoint(&format!("{}/{}", kind.path(), id));
        info!(collection = kind.path(), id, "Fetching WordPress item");

        let request = self.get(&url).query(&[("_fields", REMOTE_POST_FIELDS)]);
        self.fetch_json(request).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "WordPress request failed");
            WordPressError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        let value = classify_response(status, &text)?;

        serde_json::from_value(value).map_err(|e| WordPressError::InvalidResponse {
            status: status.as_u16(),
            detail: e.to_string(),
        })
    }
}

/// Post/page ids are numeric; anything else would change the request path.
fn parse_id(id: &str) -> Result<u64> {
    let id = id.trim();
    if id.is_empty() {
        return Err(WordPressError::InvalidInput("post id cannot be empty".into()));
    }
    id.parse()
        .map_err(|_| WordPressError::InvalidInput(format!("post id must be numeric, got {:?}", id)))
}

/// Turn a status + raw body into JSON or the matching error.
///
/// Non-JSON bodies are `InvalidResponse` whatever the status: an HTML page
/// here almost always means the site URL does not point at WordPress.
pub(crate) fn classify_response(status: StatusCode, text: &str) -> Result<Value> {
    let parsed: std::result::Result<Value, _> = serde_json::from_str(text);

    if status.is_success() {
        return parsed.map_err(|e| WordPressError::InvalidResponse {
            status: status.as_u16(),
            detail: e.to_string(),
        });
    }

    match parsed {
        Ok(value) => {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| status_text(status));
            warn!(status = %status, message = %message, "WordPress API error");
            Err(WordPressError::Api {
                status: status.as_u16(),
                message,
            })
        }
        Err(e) => {
            warn!(status = %status, "WordPress returned a non-JSON error body");
            Err(WordPressError::InvalidResponse {
                status: status.as_u16(),
                detail: e.to_string(),
            })
        }
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
