//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for the course catalog.
//! - Isolate SQLite query details from callers.
//!
//! # Invariants
//! - Repositories hold no mutable state beyond the injected handle.
//! - Storage errors are surfaced unchanged; nothing is retried or defaulted.

pub mod course_repo;
pub mod id_generator;
