use async_trait::async_trait;
use futures::stream::BoxStream;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;
use crate::specification::Specification;

/// Lazy sequence of posts produced by a repository query.
pub type PostStream = BoxStream<'static, Post>;

/// Post repository - the persistence boundary of the blog domain.
///
/// Any conforming store may stand behind this trait. Stores choose their own
/// deterministic result order; `limit`/`offset` paginate within that order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Add a new post. Fails with [`RepoError::Conflict`] when a post with
    /// the same id is already stored.
    async fn add(&self, post: Post) -> Result<(), RepoError>;

    /// Fetch a post by id. Fails with [`RepoError::NotFound`] when absent.
    async fn get_by_id(&self, id: Uuid) -> Result<Post, RepoError>;

    /// Stream the posts satisfying a specification.
    async fn get_by_spec(
        &self,
        spec: &dyn Specification<Post>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<PostStream, RepoError>;

    /// Stream every stored post.
    async fn get_all(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<PostStream, RepoError>;

    /// Replace the stored post carrying the same id. Fails with
    /// [`RepoError::NotFound`] when no such post exists.
    async fn update(&self, post: Post) -> Result<(), RepoError>;

    /// Remove the stored post carrying this post's id. Fails with
    /// [`RepoError::NotFound`] when no such post exists.
    async fn remove(&self, post: &Post) -> Result<(), RepoError>;
}
