use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Category;

/// A raw value a specification was constructed from.
///
/// Surfaced by [`Specification::filters`](super::Specification::filters) so a
/// query tree can be logged or inspected without being evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Category(Category),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Category(category) => write!(f, "{category}"),
            FilterValue::Timestamp(timestamp) => write!(f, "{}", timestamp.to_rfc3339()),
            FilterValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<Category> for FilterValue {
    fn from(category: Category) -> Self {
        FilterValue::Category(category)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(timestamp: DateTime<Utc>) -> Self {
        FilterValue::Timestamp(timestamp)
    }
}

impl From<&str> for FilterValue {
    fn from(text: &str) -> Self {
        FilterValue::Text(text.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(text: String) -> Self {
        FilterValue::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_the_raw_value() {
        assert_eq!(FilterValue::from(Category::It).to_string(), "IT");
        assert_eq!(FilterValue::from("rust").to_string(), "rust");
    }

    #[test]
    fn test_serializes_untagged() {
        let value = serde_json::to_value(FilterValue::from(Category::Sport)).unwrap();
        assert_eq!(value, serde_json::json!("Sport"));
    }
}
