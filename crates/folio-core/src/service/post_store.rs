//! Post store - the sole authority over the persisted post collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ImageUpload, NewPost, Post, PostChanges, next_post_id};
use crate::error::DomainError;
use crate::ports::{ImageStore, PostRepository};

/// Post store backed by a whole-document repository and an image store.
///
/// Every read decodes the document afresh. Every mutation reloads it, applies
/// the change in memory and rewrites it exactly once. Mutations are serialized
/// through a single-writer lock so concurrent requests cannot clobber each
/// other's rewrite; reads never wait on it.
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
    images: Arc<dyn ImageStore>,
    write_lock: Mutex<()>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self {
            repo,
            images,
            write_lock: Mutex::new(()),
        }
    }

    /// All posts, in stored order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.load().await?)
    }

    /// Find a post by id.
    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .load()
            .await?
            .into_iter()
            .find(|post| post.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Create a post, storing any non-empty images under its new id.
    pub async fn create_post(
        &self,
        fields: NewPost,
        images: Vec<ImageUpload>,
    ) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.repo.load().await?;

        let id = next_post_id(&posts).ok_or_else(|| {
            DomainError::InvalidState("no existing post id to derive a new id from".to_string())
        })?;

        let mut post = Post::new(id, fields);
        self.store_images(&post.id, &images, &mut post.image_urls)
            .await?;

        posts.push(post.clone());
        self.repo.save(&posts).await?;

        tracing::info!(
            post_id = %post.id,
            images = post.image_urls.len(),
            "Post created"
        );
        Ok(post)
    }

    /// Update a post.
    ///
    /// Text fields are merged when present. When `retained_image_urls` is set
    /// the post's images are replaced: every existing image missing from that
    /// list is deleted from disk. New images are appended in upload order.
    pub async fn update_post(&self, id: &str, changes: PostChanges) -> Result<Post, DomainError> {
        let PostChanges {
            title,
            excerpt,
            content,
            retained_image_urls,
            new_images,
        } = changes;

        let _guard = self.write_lock.lock().await;
        let mut posts = self.repo.load().await?;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        post.merge_fields(title, excerpt, content);

        if let Some(requested) = retained_image_urls {
            // Only urls this post already owns can be retained, each once.
            let mut retained: Vec<String> = Vec::with_capacity(requested.len());
            let mut foreign = Vec::new();
            for url in requested {
                if !post.image_urls.contains(&url) {
                    foreign.push(url);
                } else if !retained.contains(&url) {
                    retained.push(url);
                }
            }
            if !foreign.is_empty() {
                tracing::debug!(post_id = %id, ignored = ?foreign, "Ignoring unknown retained images");
            }

            for url in post.image_urls.iter().filter(|url| !retained.contains(url)) {
                self.images.remove_image(url).await?;
                tracing::debug!(post_id = %id, path = %url, "Image removed");
            }
            post.image_urls = retained;
        }

        self.store_images(id, &new_images, &mut post.image_urls)
            .await?;

        let updated = post.clone();
        self.repo.save(&posts).await?;

        tracing::info!(post_id = %id, images = updated.image_urls.len(), "Post updated");
        Ok(updated)
    }

    /// Delete a post and its whole image directory.
    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.repo.load().await?;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        posts.remove(index);
        self.images.purge_directory(id).await?;
        self.repo.save(&posts).await?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn store_images(
        &self,
        post_id: &str,
        uploads: &[ImageUpload],
        urls: &mut Vec<String>,
    ) -> Result<(), DomainError> {
        for upload in uploads {
            match self.images.add_image(post_id, upload).await? {
                Some(url) => urls.push(url),
                None => tracing::debug!(post_id, filename = %upload.filename, "Skipping empty upload"),
            }
        }
        Ok(())
    }
}
