// Content generator implementation using OpenAI
//
// This is the infrastructure implementation of BaseContentGenerator.
// Each method is one chat completion with a strict JSON schema response format.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{BaseContentGenerator, StructuredOutput};
use crate::domains::generation::{GeneratedPost, PhotoSuggestions};

const COMMENT_SYSTEM_PROMPT: &str = "\
You write WordPress blog posts from short user comments.
Produce a title, a body and a list of tags.
The title is concise and engaging. The body is informative, well written and professional.
Tags are relevant and help with SEO.";

const PHOTO_SYSTEM_PROMPT: &str = "\
You are a content strategist for WordPress sites.
Look at the photo and suggest topics and concrete content ideas a blog post about it could cover.";

const IMPROVE_SYSTEM_PROMPT: &str = "\
You are an experienced blog writer. Rewrite the existing post so that it matches the desired style.
Also write a new, catchy title and a list of relevant tags.";

/// OpenAI implementation of content generation
#[derive(Clone)]
pub struct OpenAIContentGenerator {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAIContentGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
        }
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// One structured completion. `user_content` is either a string or an
    /// array of content parts (text + image).
    async fn structured<T: StructuredOutput>(&self, system: &str, user_content: Value) -> Result<T> {
        let start = std::time::Instant::now();

        let request = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user_content },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": T::type_name(),
                    "schema": T::openai_schema(),
                    "strict": true,
                },
            },
        });

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("OpenAI request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(anyhow!("OpenAI API error ({}): {}", status, error_text));
        }

        let chat: ChatResponseRaw = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let message = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| anyhow!("No response from OpenAI"))?;

        if let Some(refusal) = message.refusal {
            return Err(anyhow!("OpenAI refused the request: {}", refusal));
        }
        let content = message
            .content
            .ok_or_else(|| anyhow!("OpenAI response has no content"))?;

        debug!(
            model = %self.model,
            output = %T::type_name(),
            duration_ms = start.elapsed().as_millis(),
            "OpenAI structured completion"
        );

        serde_json::from_str(&content).context("OpenAI output does not match the schema")
    }
}

#[async_trait]
impl BaseContentGenerator for OpenAIContentGenerator {
    async fn generate_from_comment(&self, comment: &str) -> Result<GeneratedPost> {
        self.structured(
            COMMENT_SYSTEM_PROMPT,
            Value::String(format!("Comment:\n{}", comment)),
        )
        .await
    }

    async fn analyze_photo(&self, photo_data_uri: &str) -> Result<PhotoSuggestions> {
        self.structured(
            PHOTO_SYSTEM_PROMPT,
            json!([
                { "type": "text", "text": "Suggest topics and content ideas for this photo." },
                { "type": "image_url", "image_url": { "url": photo_data_uri } },
            ]),
        )
        .await
    }

    async fn improve_post(&self, existing_post: &str, desired_style: &str) -> Result<GeneratedPost> {
        self.structured(
            IMPROVE_SYSTEM_PROMPT,
            Value::String(format!(
                "Existing blog post:\n{}\n\nDesired style:\n{}",
                existing_post, desired_style
            )),
        )
        .await
    }
}
