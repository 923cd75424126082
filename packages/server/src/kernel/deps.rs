//! Server dependencies for actions (using traits for testability)
//!
//! The AI collaborator sits behind a trait so tests can swap in
//! `MockContentGenerator`. WordPress clients are built per request from the
//! caller's credentials and share one HTTP connection pool.

use std::sync::Arc;

use wordpress_client::{SiteCredentials, WordPressClient};

use crate::kernel::BaseContentGenerator;

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub content_generator: Arc<dyn BaseContentGenerator>,
    /// Shared pool for outbound WordPress requests
    pub wordpress_http: reqwest::Client,
}

impl ServerDeps {
    pub fn new(content_generator: Arc<dyn BaseContentGenerator>) -> Self {
        Self {
            content_generator,
            wordpress_http: reqwest::Client::new(),
        }
    }

    /// Client for one site. Fails without a request if credentials are blank.
    pub fn wordpress(&self, credentials: &SiteCredentials) -> wordpress_client::Result<WordPressClient> {
        WordPressClient::with_http_client(self.wordpress_http.clone(), credentials)
    }
}
