//! Course use-case service.
//!
//! # Invariants
//! - Repository errors pass through unchanged.
//! - Service layer remains storage-agnostic.

use crate::model::course::{stored_description, Course, CourseView};
use crate::repo::course_repo::{CourseRepository, RepoResult};

/// Use-case wrapper projecting courses into `CourseView`.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a course; an absent description is stored as empty text.
    pub fn create_course(
        &self,
        name: &str,
        description: Option<&str>,
        category_id: &str,
    ) -> RepoResult<CourseView> {
        self.repo
            .create(name, stored_description(description), category_id)
            .map(CourseView::from)
    }

    pub fn list_courses(&self) -> RepoResult<Vec<CourseView>> {
        Ok(into_views(self.repo.find_all()?))
    }

    pub fn list_courses_by_category(&self, category_id: &str) -> RepoResult<Vec<CourseView>> {
        Ok(into_views(self.repo.find_by_category(category_id)?))
    }
}

fn into_views(courses: Vec<Course>) -> Vec<CourseView> {
    courses.into_iter().map(CourseView::from).collect()
}
