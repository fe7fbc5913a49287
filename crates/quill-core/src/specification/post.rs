//! Leaf specifications over [`Post`].

use chrono::{DateTime, Utc};

use super::{FilterValue, Specification};
use crate::domain::{Category, Post};

/// Satisfied by posts whose category equals the reference category.
#[derive(Debug, Clone)]
pub struct CategorySpecification {
    category: Category,
}

impl CategorySpecification {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Specification<Post> for CategorySpecification {
    fn filters(&self) -> Vec<FilterValue> {
        vec![self.category.into()]
    }

    fn is_satisfied_by(&self, candidate: &Post) -> bool {
        candidate.category() == self.category
    }
}

/// Satisfied by posts published within the inclusive `[from, to]` window.
#[derive(Debug, Clone)]
pub struct PublishedBetweenSpecification {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl PublishedBetweenSpecification {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }
}

impl Specification<Post> for PublishedBetweenSpecification {
    fn filters(&self) -> Vec<FilterValue> {
        vec![self.from.into(), self.to.into()]
    }

    fn is_satisfied_by(&self, candidate: &Post) -> bool {
        let published_at = candidate.published_at();
        self.from <= published_at && published_at <= self.to
    }
}

/// Satisfied by posts carrying at least one of the reference tags.
#[derive(Debug, Clone)]
pub struct TagsSpecification {
    tags: Vec<String>,
}

impl TagsSpecification {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Specification<Post> for TagsSpecification {
    fn filters(&self) -> Vec<FilterValue> {
        self.tags.iter().map(|tag| tag.clone().into()).collect()
    }

    fn is_satisfied_by(&self, candidate: &Post) -> bool {
        self.tags
            .iter()
            .any(|tag| candidate.tags().contains(tag))
    }
}
