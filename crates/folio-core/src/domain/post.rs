use serde::{Deserialize, Serialize};

use super::ImageUpload;

/// Post entity - represents a blog post and the public paths of its images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Post {
    /// Create a new post without images.
    pub fn new(id: String, fields: NewPost) -> Self {
        Self {
            id,
            title: fields.title,
            excerpt: fields.excerpt,
            content: fields.content,
            image_urls: Vec::new(),
        }
    }

    /// Overwrite the text fields that are present, leave the rest alone.
    pub fn merge_fields(
        &mut self,
        title: Option<String>,
        excerpt: Option<String>,
        content: Option<String>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = content {
            self.content = content;
        }
    }
}

/// Text fields required to create a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

/// Changes applied to an existing post.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    /// `Some` selects full-replace mode: existing images not listed here are deleted.
    pub retained_image_urls: Option<Vec<String>>,
    /// Appended after the retained images, in upload order.
    pub new_images: Vec<ImageUpload>,
}

impl PostChanges {
    /// Changes touching only the text fields.
    pub fn fields(
        title: Option<String>,
        excerpt: Option<String>,
        content: Option<String>,
    ) -> Self {
        Self {
            title,
            excerpt,
            content,
            ..Self::default()
        }
    }

    pub fn with_retained_images(mut self, urls: Vec<String>) -> Self {
        self.retained_image_urls = Some(urls);
        self
    }

    pub fn with_new_images(mut self, images: Vec<ImageUpload>) -> Self {
        self.new_images = images;
        self
    }
}

/// Derive the id of the next post: one past the largest numeric id.
///
/// Returns `None` when no numeric id exists to derive from.
pub fn next_post_id(posts: &[Post]) -> Option<String> {
    posts
        .iter()
        .filter_map(|post| post.id.parse::<u64>().ok())
        .max()
        .and_then(|max| max.checked_add(1))
        .map(|id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post::new(
            id.to_string(),
            NewPost {
                title: "t".to_string(),
                excerpt: "e".to_string(),
                content: "c".to_string(),
            },
        )
    }

    #[test]
    fn test_next_id_uses_numeric_max_not_last() {
        let posts = vec![post("2"), post("10"), post("7")];
        assert_eq!(next_post_id(&posts), Some("11".to_string()));
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(next_post_id(&[]), None);
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults_image_urls() {
        let raw = r#"{"id":"1","title":"A","excerpt":"B","content":"C"}"#;
        let decoded: Post = serde_json::from_str(raw).unwrap();
        assert!(decoded.image_urls.is_empty());

        let encoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(encoded["imageUrls"], serde_json::json!([]));
    }

    #[test]
    fn test_merge_fields_only_overwrites_present() {
        let mut p = post("1");
        p.image_urls.push("/images/1/a.png".to_string());
        p.merge_fields(Some("new".to_string()), None, None);
        assert_eq!(p.title, "new");
        assert_eq!(p.excerpt, "e");
        assert_eq!(p.image_urls, vec!["/images/1/a.png"]);
    }
}
