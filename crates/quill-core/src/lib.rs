//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Post` and `Category` entities, the composable specification engine used
//! to filter them, and the repository port that concrete stores implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod specification;

pub use error::DomainError;

/// Semantic version of the crate, surfaced for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
