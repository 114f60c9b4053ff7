use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Backing document holding the whole post collection.
///
/// Implementations always read and write the complete collection; there are
/// no partial or append writes.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Decode the full collection, in stored order.
    async fn load(&self) -> Result<Vec<Post>, RepoError>;

    /// Re-encode and overwrite the full collection.
    async fn save(&self, posts: &[Post]) -> Result<(), RepoError>;
}
