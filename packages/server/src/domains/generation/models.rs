use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wordpress_client::{CollectionKind, Content};

/// Draft post produced by the content generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedPost {
    /// Concise, engaging post title.
    pub title: String,
    /// Post body, ready to publish.
    pub body: String,
    /// Relevant tags, useful for SEO.
    pub tags: Vec<String>,
}

impl GeneratedPost {
    /// Publishable content for a new post.
    pub fn into_content(self) -> Content {
        Content {
            title: self.title,
            body: self.body,
            tags: self.tags,
            ..Default::default()
        }
    }

    /// Publishable content that updates an existing item.
    pub fn into_update(self, target_id: Option<String>, kind: CollectionKind) -> Content {
        Content {
            target_id,
            kind,
            ..self.into_content()
        }
    }
}

/// What a photo could be written about. Intermediate step of photo generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSuggestions {
    /// Themes and topics identified in the photo.
    pub suggested_topics: Vec<String>,
    /// Specific angles a post could take.
    pub content_ideas: Vec<String>,
}
