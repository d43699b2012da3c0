//! Caller-facing services.
//!
//! # Responsibility
//! - Map repository results into transport projections.
//! - Keep API layers decoupled from storage details.

pub mod course_service;
