//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::PostStore;
use folio_core::ports::{ImageStore, PostRepository};
use folio_infra::{JsonFilePostRepository, LocalImageStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
    pub images: Arc<dyn ImageStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Build the application state from the on-disk storage configuration.
    pub async fn new(config: &AppConfig) -> Self {
        let storage = &config.storage;

        let repo = JsonFilePostRepository::new(&storage.posts_file);
        if !repo.exists().await {
            tracing::warn!(
                path = %repo.path().display(),
                "Posts document not found. Post requests will fail until it exists."
            );
        }

        let asset_dir = storage.asset_dir();
        if let Err(e) = tokio::fs::create_dir_all(&asset_dir).await {
            tracing::error!(
                path = %asset_dir.display(),
                "Failed to create asset root: {}",
                e
            );
        }
        let images = Arc::new(LocalImageStore::new(&storage.public_dir, &storage.asset_root));

        tracing::info!(
            posts_file = %repo.path().display(),
            asset_dir = %asset_dir.display(),
            "Application state initialized"
        );

        Self::from_parts(Arc::new(repo), images, config.max_upload_bytes)
    }

    /// Assemble state from explicit storage implementations.
    pub fn from_parts(
        repo: Arc<dyn PostRepository>,
        images: Arc<dyn ImageStore>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            posts: Arc::new(PostStore::new(repo, images.clone())),
            images,
            max_upload_bytes,
        }
    }
}
