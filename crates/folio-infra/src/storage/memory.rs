//! In-memory post repository.
//!
//! Holds the collection in process memory; data is lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::domain::Post;
use folio_core::error::RepoError;
use folio_core::ports::PostRepository;

pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn load(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn save(&self, posts: &[Post]) -> Result<(), RepoError> {
        *self.posts.write().await = posts.to_vec();
        Ok(())
    }
}
