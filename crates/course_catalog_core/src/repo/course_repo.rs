//! Course repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list APIs over the `courses` table.
//! - Keep SQL text and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Every value reaches SQL as a bound parameter.
//! - Reads return either every decoded row or an error, never a prefix.
//! - The returned id on create is the exact id that was inserted.

use crate::db::{DbError, DbHandle};
use crate::model::course::Course;
use crate::repo::id_generator::{IdGenerator, UuidIdGenerator};
use log::{debug, warn};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COURSE_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    category_id
FROM courses";

pub type RepoResult<T> = Result<T, RepoError>;

/// Course persistence failure.
#[derive(Debug)]
pub enum RepoError {
    /// Statement could not be prepared, executed or stepped.
    Statement(DbError),
    /// A result row did not match the expected column shape.
    Decode {
        column: &'static str,
        source: rusqlite::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Statement(err) => write!(f, "course statement failed: {err}"),
            Self::Decode { column, source } => {
                write!(f, "invalid persisted course data in courses.{column}: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Statement(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Statement(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Statement(DbError::Sqlite(value))
    }
}

/// Repository interface for course persistence.
pub trait CourseRepository {
    /// Inserts one course under a freshly generated id.
    fn create(&self, name: &str, description: &str, category_id: &str) -> RepoResult<Course>;
    /// Lists every course in storage order.
    fn find_all(&self) -> RepoResult<Vec<Course>>;
    /// Lists courses whose `category_id` equals `category_id` exactly.
    fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<Course>>;
}

/// SQLite-backed course repository over an injected handle.
pub struct SqliteCourseRepository<D, G = UuidIdGenerator> {
    db: D,
    ids: G,
}

impl<D: DbHandle> SqliteCourseRepository<D> {
    pub fn new(db: D) -> Self {
        Self::with_id_generator(db, UuidIdGenerator)
    }
}

impl<D: DbHandle, G: IdGenerator> SqliteCourseRepository<D, G> {
    /// Builds a repository that draws new ids from `ids`.
    pub fn with_id_generator(db: D, ids: G) -> Self {
        Self { db, ids }
    }

    fn query_courses(
        &self,
        op: &'static str,
        sql: &str,
        bind: &[&dyn ToSql],
    ) -> RepoResult<Vec<Course>> {
        let result = self.db.with_conn(|conn| collect_courses(conn, sql, bind));
        match &result {
            Ok(courses) => debug!(
                "event=course_find module=repo status=ok op={op} rows={}",
                courses.len()
            ),
            Err(err) => warn!("event=course_find module=repo status=error op={op} error={err}"),
        }
        result
    }
}

impl<D: DbHandle, G: IdGenerator> CourseRepository for SqliteCourseRepository<D, G> {
    fn create(&self, name: &str, description: &str, category_id: &str) -> RepoResult<Course> {
        let id = self.ids.generate_id();

        let inserted = self.db.with_conn(|conn| -> RepoResult<usize> {
            Ok(conn.execute(
                "INSERT INTO courses (id, name, description, category_id)
                 VALUES (?1, ?2, ?3, ?4);",
                params![id, name, description, category_id],
            )?)
        });
        if let Err(err) = inserted {
            warn!("event=course_create module=repo status=error id={id} error={err}");
            return Err(err);
        }

        debug!("event=course_create module=repo status=ok id={id}");
        Ok(Course {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category_id: category_id.to_string(),
        })
    }

    fn find_all(&self) -> RepoResult<Vec<Course>> {
        self.query_courses("find_all", &format!("{COURSE_SELECT_SQL};"), &[])
    }

    fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<Course>> {
        self.query_courses(
            "find_by_category",
            &format!("{COURSE_SELECT_SQL} WHERE category_id = ?1;"),
            &[&category_id],
        )
    }
}

fn collect_courses(conn: &Connection, sql: &str, bind: &[&dyn ToSql]) -> RepoResult<Vec<Course>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(bind)?;
    let mut courses = Vec::new();

    while let Some(row) = rows.next()? {
        courses.push(parse_course_row(row)?);
    }

    Ok(courses)
}

/// Decodes one row selected by `COURSE_SELECT_SQL`, by column position.
fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    Ok(Course {
        id: decode_text(row, 0, "id")?,
        name: decode_text(row, 1, "name")?,
        description: decode_text(row, 2, "description")?,
        category_id: decode_text(row, 3, "category_id")?,
    })
}

fn decode_text(row: &Row<'_>, index: usize, column: &'static str) -> RepoResult<String> {
    row.get(index)
        .map_err(|source| RepoError::Decode { column, source })
}

#[cfg(test)]
mod tests {
    use super::{parse_course_row, RepoError};
    use rusqlite::Connection;

    #[test]
    fn decoder_maps_columns_by_position() {
        let conn = Connection::open_in_memory().unwrap();
        let course = conn
            .query_row("SELECT 'c-1', 'Rust', 'Ownership', 'cat-9';", [], |row| {
                Ok(parse_course_row(row))
            })
            .unwrap()
            .unwrap();

        assert_eq!(course.id, "c-1");
        assert_eq!(course.name, "Rust");
        assert_eq!(course.description, "Ownership");
        assert_eq!(course.category_id, "cat-9");
    }

    #[test]
    fn decoder_rejects_short_rows() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn
            .query_row("SELECT 'c-1', 'Rust', 'Ownership';", [], |row| {
                Ok(parse_course_row(row))
            })
            .unwrap();

        assert!(matches!(
            result,
            Err(RepoError::Decode {
                column: "category_id",
                source: rusqlite::Error::InvalidColumnIndex(3),
            })
        ));
    }

    #[test]
    fn decoder_rejects_non_text_values() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn
            .query_row("SELECT 'c-1', 7, 'Ownership', 'cat-9';", [], |row| {
                Ok(parse_course_row(row))
            })
            .unwrap();

        assert!(matches!(
            result,
            Err(RepoError::Decode { column: "name", .. })
        ));
    }
}
