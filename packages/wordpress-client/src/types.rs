use serde::{Deserialize, Serialize};

use crate::error::{Result, WordPressError};

/// Which REST collection a piece of content lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    #[default]
    Posts,
    Pages,
}

impl CollectionKind {
    /// Path segment under `/wp-json/wp/v2/`.
    pub fn path(self) -> &'static str {
        match self {
            CollectionKind::Posts => "posts",
            CollectionKind::Pages => "pages",
        }
    }
}

/// Content to publish. `target_id` turns a create into an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "postId", default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(rename = "postType", default)]
    pub kind: CollectionKind,
}

impl Content {
    /// The update target, if any. Blank ids mean "create".
    pub fn target(&self) -> Option<&str> {
        self.target_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Username + application password for HTTP Basic auth against one site.
#[derive(Clone, Default)]
pub struct SiteCredentials {
    pub site_url: String,
    pub username: String,
    pub application_password: String,
}

impl SiteCredentials {
    pub fn new(
        site_url: impl Into<String>,
        username: impl Into<String>,
        application_password: impl Into<String>,
    ) -> Self {
        Self {
            site_url: site_url.into(),
            username: username.into(),
            application_password: application_password.into(),
        }
    }

    /// Fails with every missing field named, before any request is built.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("site URL", &self.site_url),
            ("username", &self.username),
            ("application password", &self.application_password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(WordPressError::MissingCredentials(missing.join(", ")))
        }
    }
}

// Hand-written so the application password never lands in logs.
impl std::fmt::Debug for SiteCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteCredentials")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .field("application_password", &"<redacted>")
            .finish()
    }
}

/// A tag on the remote site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A `{ rendered }` field as returned by the REST API. Contains site markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A post or page as returned by search and get.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePost {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
}

/// Location of a successfully created or updated item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub post_url: String,
    pub post_id: u64,
}

/// Body of a create/update request.
#[derive(Debug, Serialize)]
pub(crate) struct PublishBody<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
}

/// Body of a create-tag request.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTagBody<'a> {
    pub name: &'a str,
}
