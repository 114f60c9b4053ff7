use async_trait::async_trait;

use crate::domain::ImageUpload;
use crate::error::AssetError;

/// Image asset storage - owns the per-post image directories.
///
/// Public paths have the form `/<asset-root>/<post-id>/<name>`.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Create the post's image directory if it is missing.
    async fn ensure_directory(&self, post_id: &str) -> Result<(), AssetError>;

    /// Store an upload and return its public path.
    ///
    /// Empty uploads are skipped and yield `None`.
    async fn add_image(
        &self,
        post_id: &str,
        image: &ImageUpload,
    ) -> Result<Option<String>, AssetError>;

    /// Delete the file behind a public path. A missing file is not an error.
    async fn remove_image(&self, public_path: &str) -> Result<(), AssetError>;

    /// Remove the post's image directory and everything in it. A missing
    /// directory is not an error.
    async fn purge_directory(&self, post_id: &str) -> Result<(), AssetError>;

    /// Public paths of every stored image, sorted.
    async fn list_images(&self) -> Result<Vec<String>, AssetError>;
}
