//! Tag lookup and creation.
//!
//! The REST API wants numeric tag ids; users and the generator deal in
//! names. Resolution is best effort: a tag that cannot be resolved is
//! dropped, and publishing goes ahead without it.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Result, WordPressError};
use crate::types::{CreateTagBody, Tag};
use crate::{classify_response, WordPressClient};

/// How many existing tags are fetched up front (REST API page size maximum).
pub const EXISTING_TAGS_LIMIT: u32 = 100;

impl WordPressClient {
    /// Most used tags first, at most [`EXISTING_TAGS_LIMIT`].
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let url = self.endpoint("tags");
        let per_page = EXISTING_TAGS_LIMIT.to_string();

        let response = self
            .get(&url)
            .query(&[
                ("per_page", per_page.as_str()),
                ("orderby", "count"),
                ("order", "desc"),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let value = classify_response(status, &text)?;

        serde_json::from_value(value).map_err(|e| WordPressError::InvalidResponse {
            status: status.as_u16(),
            detail: e.to_string(),
        })
    }

    /// Create a tag. If the site says it already exists, the existing id is returned.
    pub async fn create_tag(&self, name: &str) -> Result<Tag> {
        let url = self.endpoint("tags");

        let response = self
            .post(&url)
            .json(&CreateTagBody { name })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Some(id) = existing_term_id(&text) {
                debug!(tag = name, id, "Tag already exists on site");
                return Ok(Tag {
                    id,
                    name: name.to_string(),
                });
            }
        }

        let value = classify_response(status, &text)?;
        let id = value
            .get("id")
            .and_then(Value::as_u64)
            .ok_or(WordPressError::AmbiguousSuccess("id"))?;
        let created_name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string();

        info!(tag = %created_name, id, "Created WordPress tag");
        Ok(Tag {
            id,
            name: created_name,
        })
    }

    /// Map tag names to ids, creating the ones the site does not have.
    ///
    /// Never fails. Ids come back in input order; names that could not be
    /// resolved are left out. Matching is case-insensitive, and a tag
    /// created earlier in the same call is reused by later duplicates.
    /// Creation is sequential and not rolled back on failure.
    pub async fn resolve_tags(&self, names: &[String]) -> Vec<u64> {
        if names.is_empty() {
            return Vec::new();
        }

        let mut known: HashMap<String, u64> = HashMap::new();
        match self.list_tags().await {
            Ok(existing) => {
                for tag in existing {
                    // Keep the most used tag when two differ only by case.
                    known.entry(tag.name.to_lowercase()).or_insert(tag.id);
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not load existing tags; treating site as having none");
            }
        }
        debug!(existing = known.len(), requested = names.len(), "Resolving tags");

        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            let key = name.to_lowercase();
            if let Some(id) = known.get(&key) {
                ids.push(*id);
                continue;
            }

            match self.create_tag(name).await {
                Ok(tag) => {
                    known.insert(key, tag.id);
                    ids.push(tag.id);
                }
                Err(e) => {
                    warn!(tag = name, error = %e, "Skipping tag that could not be created");
                }
            }
        }

        ids
    }
}

/// `term_id` from a `term_exists` error body, if that is what this is.
fn existing_term_id(text: &str) -> Option<u64> {
    let value: Value = serde_json::from_str(text).ok()?;
    if value.get("code").and_then(Value::as_str) != Some("term_exists") {
        return None;
    }
    value
        .get("data")
        .and_then(|data| data.get("term_id"))
        .and_then(Value::as_u64)
}
