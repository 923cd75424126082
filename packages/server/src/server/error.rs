//! HTTP error responses.
//!
//! Caller mistakes map to 400; anything that went wrong on the AI service or
//! the WordPress site maps to 502. The body is always `{ "error": message }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wordpress_client::WordPressError;

use crate::domains::generation::GenerationError;

#[derive(Debug)]
pub enum ApiError {
    Generation(GenerationError),
    WordPress(WordPressError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Generation(GenerationError::EmptyInput(_))
            | ApiError::Generation(GenerationError::InvalidPhoto) => StatusCode::BAD_REQUEST,
            ApiError::Generation(GenerationError::Failed(_)) => StatusCode::BAD_GATEWAY,
            ApiError::WordPress(
                WordPressError::MissingCredentials(_) | WordPressError::InvalidInput(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::WordPress(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Generation(e) => e.to_string(),
            ApiError::WordPress(e) => e.to_string(),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        ApiError::Generation(err)
    }
}

impl From<WordPressError> for ApiError {
    fn from(err: WordPressError) -> Self {
        ApiError::WordPress(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(GenerationError::EmptyInput("x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(WordPressError::MissingCredentials("username".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(WordPressError::Api {
                status: 403,
                message: "Forbidden".into()
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(WordPressError::AmbiguousSuccess("link")).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
