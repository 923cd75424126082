// Common test utilities
#![allow(dead_code)]

use wiremock::{MockServer, Request};
use wordpress_client::{SiteCredentials, WordPressClient};

pub const USERNAME: &str = "editor";
pub const APP_PASSWORD: &str = "secret";
/// base64("editor:secret")
pub const AUTH_HEADER: &str = "Basic ZWRpdG9yOnNlY3JldA==";

/// Client pointed at the mock server, entered the way a user would (with `/wp-admin/`).
pub fn client_for(server: &MockServer) -> WordPressClient {
    let credentials = SiteCredentials::new(
        format!("{}/wp-admin/", server.uri()),
        USERNAME,
        APP_PASSWORD,
    );
    WordPressClient::new(&credentials).unwrap()
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

pub async fn count_requests(server: &MockServer, method: &str, path: &str) -> usize {
    received(server)
        .await
        .iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .count()
}
