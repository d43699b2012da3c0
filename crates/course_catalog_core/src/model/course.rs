//! Course entity and transport-facing projection.
//!
//! # Invariants
//! - `id` is generated by the repository and never mutated afterwards.
//! - Storage always holds a description; absence exists only in `CourseView`.

use serde::Serialize;

/// Stable identifier of a course row.
pub type CourseId = String;

/// Course record as persisted in the `courses` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Empty string when the caller supplied no description.
    pub description: String,
    /// Reference to a category owned outside this crate.
    pub category_id: String,
}

/// Course shape exposed to API callers.
///
/// `category_id` is deliberately not projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub id: CourseId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Course> for CourseView {
    fn from(course: Course) -> Self {
        let description = Some(course.description).filter(|text| !text.is_empty());
        Self {
            id: course.id,
            name: course.name,
            description,
        }
    }
}

/// Maps an optional transport description to its stored form.
pub fn stored_description(description: Option<&str>) -> &str {
    description.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{stored_description, Course, CourseView};

    fn course(description: &str) -> Course {
        Course {
            id: "c-1".to_string(),
            name: "Intro to Go".to_string(),
            description: description.to_string(),
            category_id: "cat-1".to_string(),
        }
    }

    #[test]
    fn view_keeps_non_empty_description() {
        let view = CourseView::from(course("Basics"));
        assert_eq!(view.id, "c-1");
        assert_eq!(view.name, "Intro to Go");
        assert_eq!(view.description.as_deref(), Some("Basics"));
    }

    #[test]
    fn view_drops_empty_description() {
        let view = CourseView::from(course(""));
        assert_eq!(view.description, None);
    }

    #[test]
    fn course_serializes_storage_fields() {
        assert_eq!(
            serde_json::to_value(course("")).unwrap(),
            serde_json::json!({
                "id": "c-1",
                "name": "Intro to Go",
                "description": "",
                "category_id": "cat-1"
            })
        );
    }

    #[test]
    fn absent_description_is_stored_as_empty_string() {
        assert_eq!(stored_description(None), "");
        assert_eq!(stored_description(Some("Basics")), "Basics");
    }
}
