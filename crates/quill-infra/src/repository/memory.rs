//! In-memory post repository - the test fake and development fallback.
//!
//! Posts are held in a HashMap behind an async RwLock.
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, PostStream};
use quill_core::specification::Specification;

/// In-memory post store.
///
/// Query results are ordered by publication timestamp, id as tiebreak, so
/// `limit`/`offset` paginate deterministically.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn page(mut posts: Vec<Post>, limit: Option<usize>, offset: Option<usize>) -> PostStream {
        posts.sort_by_key(|post| (post.published_at(), post.id()));

        let posts = posts.into_iter().skip(offset.unwrap_or(0));
        let posts: Vec<Post> = match limit {
            Some(limit) => posts.take(limit).collect(),
            None => posts.collect(),
        };

        futures::stream::iter(posts).boxed()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn add(&self, post: Post) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&post.id()) {
            return Err(RepoError::Conflict { id: post.id() });
        }

        tracing::debug!(post_id = %post.id(), "Adding post");
        store.insert(post.id(), post);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Post, RepoError> {
        let store = self.store.read().await;
        store.get(&id).cloned().ok_or(RepoError::NotFound { id })
    }

    async fn get_by_spec(
        &self,
        spec: &dyn Specification<Post>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<PostStream, RepoError> {
        let store = self.store.read().await;

        let matches: Vec<Post> = store
            .values()
            .filter(|post| spec.is_satisfied_by(post))
            .cloned()
            .collect();

        tracing::debug!(
            filters = ?spec.filters(),
            matched = matches.len(),
            "Querying posts by specification"
        );

        Ok(Self::page(matches, limit, offset))
    }

    async fn get_all(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<PostStream, RepoError> {
        let store = self.store.read().await;
        let posts: Vec<Post> = store.values().cloned().collect();
        Ok(Self::page(posts, limit, offset))
    }

    async fn update(&self, post: Post) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        match store.get_mut(&post.id()) {
            Some(slot) => {
                tracing::debug!(post_id = %post.id(), "Updating post");
                *slot = post;
                Ok(())
            }
            None => Err(RepoError::NotFound { id: post.id() }),
        }
    }

    async fn remove(&self, post: &Post) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        match store.remove(&post.id()) {
            Some(_) => {
                tracing::debug!(post_id = %post.id(), "Removing post");
                Ok(())
            }
            None => Err(RepoError::NotFound { id: post.id() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use quill_core::domain::Category;
    use quill_core::specification::{
        CategorySpecification, PublishedBetweenSpecification, TagsSpecification,
    };

    use super::*;

    fn post_published_at(offset_hours: i64, category: Category, title: &str) -> Post {
        Post::restore(
            Uuid::new_v4(),
            category,
            Utc::now() - TimeDelta::hours(offset_hours),
            title,
            "content",
            vec![],
            0,
            0,
        )
    }

    async fn collect(stream: PostStream) -> Vec<Post> {
        stream.collect().await
    }

    #[tokio::test]
    async fn test_add_and_get_by_id() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Category::It, "Lifetimes", "...", vec![]);
        let id = post.id();

        repo.add(post).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap();
        assert_eq!(stored.id(), id);
        assert_eq!(stored.title(), "Lifetimes");
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let id = Uuid::new_v4();

        let result = repo.get_by_id(id).await;
        assert!(matches!(result, Err(RepoError::NotFound { id: missing }) if missing == id));
    }

    #[tokio::test]
    async fn test_add_twice_is_a_conflict() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Category::It, "Lifetimes", "...", vec![]);

        repo.add(post.clone()).await.unwrap();

        let result = repo.add(post.clone()).await;
        assert!(matches!(result, Err(RepoError::Conflict { id }) if id == post.id()));
    }

    #[tokio::test]
    async fn test_update_replaces_by_id() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Category::It, "Draft", "...", vec![]);
        let id = post.id();

        repo.add(post.clone()).await.unwrap();
        repo.update(post.with_title("Final").liked()).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap();
        assert_eq!(stored.title(), "Final");
        assert_eq!(stored.likes(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Category::It, "Draft", "...", vec![]);

        let result = repo.update(post).await;
        assert!(matches!(result, Err(RepoError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_then_get_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Category::It, "Draft", "...", vec![]);
        let id = post.id();

        repo.add(post.clone()).await.unwrap();
        repo.remove(&post).await.unwrap();

        assert!(matches!(
            repo.get_by_id(id).await,
            Err(RepoError::NotFound { .. })
        ));
        assert!(matches!(
            repo.remove(&post).await,
            Err(RepoError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_by_spec_filters_candidates() {
        let repo = InMemoryPostRepository::new();
        repo.add(post_published_at(3, Category::It, "it-post"))
            .await
            .unwrap();
        repo.add(post_published_at(2, Category::Business, "biz-post"))
            .await
            .unwrap();

        let spec = CategorySpecification::new(Category::It);
        let matches = collect(repo.get_by_spec(&spec, None, None).await.unwrap()).await;

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title(), "it-post");
    }

    #[tokio::test]
    async fn test_get_by_spec_with_composed_tree() {
        let repo = InMemoryPostRepository::new();

        let fresh_it =
            post_published_at(1, Category::It, "fresh-it").with_tags(vec!["rust".to_owned()]);
        repo.add(fresh_it).await.unwrap();
        repo.add(post_published_at(48, Category::It, "stale-it"))
            .await
            .unwrap();
        repo.add(post_published_at(1, Category::Sport, "fresh-sport"))
            .await
            .unwrap();

        let last_day = PublishedBetweenSpecification::new(
            Utc::now() - TimeDelta::hours(24),
            Utc::now(),
        );
        let spec = CategorySpecification::new(Category::It)
            .and(last_day)
            .and(TagsSpecification::new(["go", "rust"]));

        let matches = collect(repo.get_by_spec(&spec, None, None).await.unwrap()).await;

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title(), "fresh-it");
    }

    #[tokio::test]
    async fn test_pagination_is_deterministic() {
        let repo = InMemoryPostRepository::new();
        for hours in [4, 3, 2, 1] {
            repo.add(post_published_at(hours, Category::It, &format!("post-{hours}")))
                .await
                .unwrap();
        }

        let all = collect(repo.get_all(None, None).await.unwrap()).await;
        let titles: Vec<&str> = all.iter().map(Post::title).collect();
        assert_eq!(titles, ["post-4", "post-3", "post-2", "post-1"]);

        let page = collect(repo.get_all(Some(2), Some(1)).await.unwrap()).await;
        let titles: Vec<&str> = page.iter().map(Post::title).collect();
        assert_eq!(titles, ["post-3", "post-2"]);

        let past_end = collect(repo.get_all(Some(10), Some(4)).await.unwrap()).await;
        assert!(past_end.is_empty());
    }
}
