//! Search and get-by-id.

mod common;

use common::{client_for, received, AUTH_HEADER};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordpress_client::{CollectionKind, WordPressError};

fn remote(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": { "rendered": title },
        "content": { "rendered": format!("<p>{}</p>", title), "protected": false },
        "excerpt": { "rendered": "", "protected": false }
    })
}

#[tokio::test]
async fn search_sends_filters_and_parses_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("search", "rust & tokio"))
        .and(query_param("status", "publish"))
        .and(query_param("_fields", "id,title,content,excerpt"))
        .and(header("authorization", AUTH_HEADER))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([remote(1, "One"), remote(2, "Two")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let posts = client_for(&server)
        .search("rust & tokio", CollectionKind::Posts)
        .await
        .unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].id, 2);
    assert_eq!(posts[1].content.rendered, "<p>Two</p>");
}

#[tokio::test]
async fn search_pages_uses_pages_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let pages = client_for(&server)
        .search("about", CollectionKind::Pages)
        .await
        .unwrap();

    assert!(pages.is_empty());
}

#[tokio::test]
async fn empty_query_fails_before_request() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .search("   ", CollectionKind::Posts)
        .await
        .unwrap_err();

    assert!(matches!(err, WordPressError::InvalidInput(_)));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn search_rejection_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "rest_not_logged_in",
            "message": "You are not currently logged in."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search("anything", CollectionKind::Posts)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not currently logged in"));
}

#[tokio::test]
async fn search_unexpected_shape_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "posts": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search("anything", CollectionKind::Posts)
        .await
        .unwrap_err();

    assert!(matches!(err, WordPressError::InvalidResponse { .. }));
}

#[tokio::test]
async fn get_by_id_fetches_single_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages/7"))
        .and(query_param("_fields", "id,title,content,excerpt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote(7, "About")))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_by_id(" 7 ", CollectionKind::Pages)
        .await
        .unwrap();

    assert_eq!(page.id, 7);
    assert_eq!(page.title.rendered, "About");
}

#[tokio::test]
async fn get_by_id_rejects_blank_and_non_numeric_ids() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    for id in ["", "abc", "-3"] {
        let err = client.get_by_id(id, CollectionKind::Posts).await.unwrap_err();
        assert!(matches!(err, WordPressError::InvalidInput(_)), "id: {id:?}");
    }
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn get_missing_item_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID.",
            "data": { "status": 404 }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_by_id("999", CollectionKind::Posts)
        .await
        .unwrap_err();

    assert!(matches!(err, WordPressError::Api { status: 404, .. }));
    assert!(err.to_string().contains("Invalid post ID."));
}
