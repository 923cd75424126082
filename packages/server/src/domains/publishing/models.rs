use serde::Deserialize;
use wordpress_client::{CollectionKind, Content, SiteCredentials};

/// Site connection as entered in the form. Sent with every WordPress action.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConnection {
    #[serde(default)]
    pub wp_url: String,
    #[serde(default)]
    pub wp_username: String,
    #[serde(default)]
    pub wp_app_password: String,
}

impl SiteConnection {
    pub fn credentials(&self) -> SiteCredentials {
        SiteCredentials::new(&self.wp_url, &self.wp_username, &self.wp_app_password)
    }
}

#[derive(Clone, Deserialize)]
pub struct PublishRequest {
    pub content: Content,
    #[serde(flatten)]
    pub site: SiteConnection,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub post_type: CollectionKind,
    #[serde(flatten)]
    pub site: SiteConnection,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub post_type: CollectionKind,
    #[serde(flatten)]
    pub site: SiteConnection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_request_reads_form_fields() {
        let request: PublishRequest = serde_json::from_value(serde_json::json!({
            "content": { "title": "T", "body": "B", "tags": [], "postId": "5", "postType": "pages" },
            "wpUrl": "example.com",
            "wpUsername": "editor",
            "wpAppPassword": "abcd"
        }))
        .unwrap();

        let creds = request.site.credentials();
        assert_eq!(creds.site_url, "example.com");
        assert_eq!(creds.application_password, "abcd");
        assert_eq!(request.content.target(), Some("5"));
        assert_eq!(request.content.kind, CollectionKind::Pages);
    }

    #[test]
    fn missing_fields_become_blank() {
        let request: SearchRequest =
            serde_json::from_value(serde_json::json!({ "query": "rust" })).unwrap();

        assert!(request.site.credentials().validate().is_err());
        assert_eq!(request.post_type, CollectionKind::Posts);
    }
}
