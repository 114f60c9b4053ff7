//! Multipart post forms.
//!
//! Field names: `title`, `excerpt`, `content`, repeated `image` file parts and
//! repeated `existingImageUrls` text parts.

use actix_multipart::Multipart;
use futures::StreamExt;

use folio_core::domain::{ImageUpload, NewPost, PostChanges};

use crate::middleware::error::{AppError, AppResult};

/// Fields collected from a multipart post form.
#[derive(Debug, Default)]
pub struct PostForm {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub images: Vec<ImageUpload>,
    /// `Some` as soon as one `existingImageUrls` part was sent, even an empty one.
    pub existing_image_urls: Option<Vec<String>>,
}

impl PostForm {
    /// Drain the multipart stream, failing once more than `limit` bytes arrive.
    pub async fn read(mut payload: Multipart, limit: usize) -> AppResult<Self> {
        let mut form = Self::default();
        let mut received = 0usize;

        while let Some(field) = payload.next().await {
            let mut field = field.map_err(malformed)?;
            let (name, filename) = match field.content_disposition() {
                Some(disposition) => (
                    disposition.get_name().unwrap_or_default().to_string(),
                    disposition.get_filename().map(str::to_string),
                ),
                None => (String::new(), None),
            };

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(malformed)?;
                received += chunk.len();
                if received > limit {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Request body exceeds {} bytes",
                        limit
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }

            form.accept(&name, filename, bytes)?;
        }

        Ok(form)
    }

    fn accept(&mut self, name: &str, filename: Option<String>, bytes: Vec<u8>) -> AppResult<()> {
        match name {
            "title" => self.title = Some(text(name, bytes)?),
            "excerpt" => self.excerpt = Some(text(name, bytes)?),
            "content" => self.content = Some(text(name, bytes)?),
            "image" => self
                .images
                .push(ImageUpload::new(filename.unwrap_or_default(), bytes)),
            "existingImageUrls" => {
                let url = text(name, bytes)?;
                let urls = self.existing_image_urls.get_or_insert_with(Vec::new);
                if !url.is_empty() {
                    urls.push(url);
                }
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
        Ok(())
    }

    /// Fields and uploads for a new post; all three text fields are required.
    pub fn into_new_post(self) -> AppResult<(NewPost, Vec<ImageUpload>)> {
        let Self {
            title,
            excerpt,
            content,
            images,
            ..
        } = self;

        match (title, excerpt, content) {
            (Some(title), Some(excerpt), Some(content)) => Ok((
                NewPost {
                    title,
                    excerpt,
                    content,
                },
                images,
            )),
            (title, excerpt, content) => {
                let missing: Vec<&str> = [
                    ("title", title.is_none()),
                    ("excerpt", excerpt.is_none()),
                    ("content", content.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(AppError::BadRequest(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    /// Changes for an existing post.
    pub fn into_changes(self) -> PostChanges {
        PostChanges {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            retained_image_urls: self.existing_image_urls,
            new_images: self.images,
        }
    }
}

fn text(name: &str, bytes: Vec<u8>) -> AppResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| AppError::BadRequest(format!("Form field '{}' is not valid UTF-8", name)))
}

fn malformed(err: actix_multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Malformed multipart body: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_listed() {
        let form = PostForm {
            excerpt: Some("e".to_string()),
            ..PostForm::default()
        };

        match form.into_new_post() {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Missing required fields: title, content")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_existing_url_selects_replace_with_nothing() {
        let mut form = PostForm::default();
        form.accept("existingImageUrls", None, Vec::new()).unwrap();

        let changes = form.into_changes();
        assert_eq!(changes.retained_image_urls, Some(Vec::new()));
    }

    #[test]
    fn test_images_without_existing_urls_append() {
        let mut form = PostForm::default();
        form.accept("image", Some("a.png".to_string()), vec![1])
            .unwrap();

        let changes = form.into_changes();
        assert!(changes.retained_image_urls.is_none());
        assert_eq!(changes.new_images, vec![ImageUpload::new("a.png", vec![1])]);
    }
}
