//! Post collection persisted as a single pretty-printed JSON array.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use folio_core::domain::Post;
use folio_core::error::RepoError;
use folio_core::ports::PostRepository;

/// JSON file repository.
///
/// Every `load` reads and decodes the whole file; every `save` re-encodes the
/// whole collection and overwrites the file.
pub struct JsonFilePostRepository {
    path: PathBuf,
}

impl JsonFilePostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is present.
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    async fn load(&self) -> Result<Vec<Post>, RepoError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RepoError::Read(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| RepoError::Decode(format!("{}: {}", self.path.display(), e)))
    }

    async fn save(&self, posts: &[Post]) -> Result<(), RepoError> {
        let encoded =
            serde_json::to_string_pretty(posts).map_err(|e| RepoError::Write(e.to_string()))?;

        fs::write(&self.path, encoded)
            .await
            .map_err(|e| RepoError::Write(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            count = posts.len(),
            "Post document written"
        );
        Ok(())
    }
}
