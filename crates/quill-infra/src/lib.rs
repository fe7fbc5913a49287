//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Ships the in-memory post store used as the test fake and development
//! fallback, plus the tracing bootstrap shared by host applications.

pub mod repository;
pub mod telemetry;

pub use repository::InMemoryPostRepository;
pub use telemetry::{TelemetryConfig, init_telemetry};
