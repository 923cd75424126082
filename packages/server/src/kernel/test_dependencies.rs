// TestDependencies - mock implementations for testing
//
// Provides a mock content generator that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseContentGenerator, ServerDeps};
use crate::domains::generation::{GeneratedPost, PhotoSuggestions};

// =============================================================================
// Mock Content Generator
// =============================================================================

/// A call received by the mock, with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorCall {
    Comment(String),
    Photo(String),
    Improve {
        existing_post: String,
        desired_style: String,
    },
}

#[derive(Clone, Default)]
pub struct MockContentGenerator {
    posts: Arc<Mutex<Vec<GeneratedPost>>>,
    suggestions: Arc<Mutex<Vec<PhotoSuggestions>>>,
    calls: Arc<Mutex<Vec<GeneratorCall>>>,
    failing: bool,
}

impl MockContentGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails, as if the AI service were down
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Queue a post for the next comment/improve call
    pub fn with_post(self, title: &str, body: &str, tags: &[&str]) -> Self {
        self.posts.lock().unwrap().push(GeneratedPost {
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        });
        self
    }

    /// Queue suggestions for the next photo analysis
    pub fn with_suggestions(self, topics: &[&str], ideas: &[&str]) -> Self {
        self.suggestions.lock().unwrap().push(PhotoSuggestions {
            suggested_topics: topics.iter().map(|t| t.to_string()).collect(),
            content_ideas: ideas.iter().map(|i| i.to_string()).collect(),
        });
        self
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GeneratorCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(anyhow!("mock generator failure"))
        } else {
            Ok(())
        }
    }

    fn next_post(&self) -> GeneratedPost {
        let mut posts = self.posts.lock().unwrap();
        if !posts.is_empty() {
            posts.remove(0)
        } else {
            GeneratedPost {
                title: "Mock Title".to_string(),
                body: "Mock body.".to_string(),
                tags: vec!["mock".to_string()],
            }
        }
    }
}

#[async_trait]
impl BaseContentGenerator for MockContentGenerator {
    async fn generate_from_comment(&self, comment: &str) -> Result<GeneratedPost> {
        self.record(GeneratorCall::Comment(comment.to_string()))?;
        Ok(self.next_post())
    }

    async fn analyze_photo(&self, photo_data_uri: &str) -> Result<PhotoSuggestions> {
        self.record(GeneratorCall::Photo(photo_data_uri.to_string()))?;
        let mut suggestions = self.suggestions.lock().unwrap();
        if !suggestions.is_empty() {
            Ok(suggestions.remove(0))
        } else {
            Ok(PhotoSuggestions {
                suggested_topics: vec!["Mock topic".to_string()],
                content_ideas: vec!["Mock idea".to_string()],
            })
        }
    }

    async fn improve_post(&self, existing_post: &str, desired_style: &str) -> Result<GeneratedPost> {
        self.record(GeneratorCall::Improve {
            existing_post: existing_post.to_string(),
            desired_style: desired_style.to_string(),
        })?;
        Ok(self.next_post())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builds ServerDeps around mocks and keeps handles for assertions
pub struct TestDependencies {
    pub generator: MockContentGenerator,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            generator: MockContentGenerator::new(),
        }
    }

    pub fn with_generator(mut self, generator: MockContentGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(Arc::new(self.generator.clone()))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
