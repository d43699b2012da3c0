//! Core data access for the course catalog.
//! This crate owns the `courses` persistence contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DbError, DbHandle, SharedDb};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::course::{Course, CourseId, CourseView};
pub use repo::course_repo::{CourseRepository, RepoError, RepoResult, SqliteCourseRepository};
pub use repo::id_generator::{IdGenerator, UuidIdGenerator};
pub use service::course_service::CourseService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
