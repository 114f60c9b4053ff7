//! Data Transfer Objects - JSON request bodies for the post API.
//!
//! Multipart forms carry the same field names; these types cover the plain
//! JSON variant of each route.

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

/// Request to update a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    /// When present, the post keeps exactly these images (in this order).
    pub image_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_fields_are_optional() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("New"));
        assert!(req.content.is_none());
        assert!(req.image_urls.is_none());

        let req: UpdatePostRequest = serde_json::from_str(r#"{"imageUrls":[]}"#).unwrap();
        assert_eq!(req.image_urls, Some(Vec::new()));
    }
}
