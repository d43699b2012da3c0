//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `course_catalog_core` linkage.
//! - List stored courses, optionally narrowed to one category.
//!
//! Usage: `course_catalog_cli [DB_PATH] [CATEGORY_ID]`

use course_catalog_core::db::{open_db, open_db_in_memory};
use course_catalog_core::{
    default_log_level, init_logging, Course, CourseRepository, LoggingConfig,
    SqliteCourseRepository,
};
use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "course_catalog_logs";

fn main() -> ExitCode {
    if let Err(err) = init_cli_logging() {
        eprintln!("warning: logging disabled: {err}");
    }

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_cli_logging() -> Result<(), Box<dyn Error>> {
    let config = LoggingConfig::new(default_log_level(), std::env::temp_dir().join(LOG_DIR_NAME))?;
    init_logging(&config)?;
    Ok(())
}

fn run(args: &[String], out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let conn = match args.first() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let repo = SqliteCourseRepository::new(&conn);

    let courses = match args.get(1) {
        Some(category_id) => repo.find_by_category(category_id)?,
        None => repo.find_all()?,
    };

    for course in &courses {
        writeln!(out, "{}", render_course(course))?;
    }
    writeln!(out, "courses count={}", courses.len())?;
    Ok(())
}

fn render_course(course: &Course) -> String {
    format!(
        "course id={} name={:?} category_id={}",
        course.id, course.name, course.category_id
    )
}
