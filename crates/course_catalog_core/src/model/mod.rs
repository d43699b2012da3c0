//! Course catalog domain model.
//!
//! # Responsibility
//! - Define the stored course record and its transport projection.
//!
//! # Invariants
//! - Every course is identified by an id assigned once at creation.
//! - Every stored course references exactly one category id.

pub mod course;
