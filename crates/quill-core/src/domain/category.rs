use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed set of categories a post can belong to.
///
/// Categories compare by value and round-trip through their string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "IT")]
    It,
    Business,
    Sport,
}

impl Category {
    /// The string value of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::It => "IT",
            Category::Business => "Business",
            Category::Sport => "Sport",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IT" => Ok(Category::It),
            "Business" => Ok(Category::Business),
            "Sport" => Ok(Category::Sport),
            other => Err(DomainError::Validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}
