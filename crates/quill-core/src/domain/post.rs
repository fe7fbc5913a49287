use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Post entity - a single blog article.
///
/// A post is an immutable value: fields are only readable through borrowing
/// accessors, and a "changed" post is a new value produced by the `with_*`
/// builders. Identity lives entirely in the id - two posts with the same id
/// are the same post no matter what the other fields say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    id: Uuid,
    category: Category,
    published_at: DateTime<Utc>,
    title: String,
    content: String,
    tags: Vec<String>,
    likes: u64,
    dislikes: u64,
}

impl Post {
    /// Create a new post with generated ID and publication timestamp.
    pub fn new(
        category: Category,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            published_at: Utc::now(),
            title: title.into(),
            content: content.into(),
            tags,
            likes: 0,
            dislikes: 0,
        }
    }

    /// Rehydrate a post from a stored row, every field explicit.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        category: Category,
        published_at: DateTime<Utc>,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        likes: u64,
        dislikes: u64,
    ) -> Self {
        Self {
            id,
            category,
            published_at,
            title: title.into(),
            content: content.into(),
            tags,
            likes,
            dislikes,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Tags in publication order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.dislikes
    }

    /// A copy of this post with a different title, same identity.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// A copy of this post with different content, same identity.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// A copy of this post with a different category, same identity.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// A copy of this post with a different tag list, same identity.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// A copy of this post with one more like.
    pub fn liked(mut self) -> Self {
        self.likes += 1;
        self
    }

    /// A copy of this post with one more dislike.
    pub fn disliked(mut self) -> Self {
        self.dislikes += 1;
        self
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
