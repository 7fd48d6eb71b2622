//! Parsing catalog lines into a validated [`Catalog`].
//!
//! Each line has the form `number,title[,prerequisite]*`. There is no header
//! row and no escaping. Parsing happens in two passes: every line is parsed
//! and inserted, then every prerequisite is checked against the complete set
//! of course numbers.

use std::{collections::HashSet, num::NonZeroUsize};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    Catalog,
    domain::{Course, CourseId, DuplicateCourseError},
};

/// The field delimiter.
const DELIMITER: char = ',';

/// Errors that make a catalog invalid.
///
/// Any one of these rejects the whole catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line has fewer than two fields.
    #[error("invalid format in line {line_number}: '{line}'")]
    MalformedRecord {
        /// 1-based line number.
        line_number: usize,
        /// The offending line.
        line: String,
    },

    /// The course number field is empty.
    #[error("invalid format in line {line_number}: course number is empty")]
    EmptyIdentifier {
        /// 1-based line number.
        line_number: usize,
    },

    /// A course number appears on more than one line.
    #[error("duplicate course {id} in line {line_number}")]
    DuplicateCourse {
        /// The repeated course number.
        id: CourseId,
        /// 1-based line number of the repeat.
        line_number: usize,
    },

    /// A prerequisite refers to a course that is not in the catalog.
    #[error("prerequisite {prerequisite} for course {course} does not exist")]
    DanglingPrerequisite {
        /// The missing course number.
        prerequisite: CourseId,
        /// The course that lists it.
        course: CourseId,
    },
}

/// Parses catalog lines into a catalog with `bucket_count` buckets.
///
/// # Errors
///
/// Returns the first error encountered. Line errors are reported in file
/// order; dangling prerequisites are reported in catalog enumeration order.
#[instrument(level = "debug", skip(lines))]
pub fn parse_catalog<I, S>(lines: I, bucket_count: NonZeroUsize) -> Result<Catalog, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut catalog = Catalog::new(bucket_count);

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let course = parse_line(line.as_ref(), line_number)?;
        catalog
            .insert(course)
            .map_err(|DuplicateCourseError(id)| ParseError::DuplicateCourse { id, line_number })?;
    }

    check_prerequisites(&catalog)?;

    debug!(courses = catalog.len(), "parsed catalog");
    Ok(catalog)
}

/// Parses a single line into a course.
///
/// Empty prerequisite fields are padding and are dropped.
///
/// # Errors
///
/// Returns an error if the line has fewer than two fields or an empty
/// course number.
pub fn parse_line(line: &str, line_number: usize) -> Result<Course, ParseError> {
    let fields = split_fields(line);

    let [number, title, prerequisites @ ..] = fields.as_slice() else {
        return Err(ParseError::MalformedRecord {
            line_number,
            line: line.to_string(),
        });
    };

    let id = CourseId::try_from(*number)
        .map_err(|_| ParseError::EmptyIdentifier { line_number })?;

    let prerequisites = prerequisites
        .iter()
        .filter_map(|field| CourseId::try_from(*field).ok())
        .collect();

    Ok(Course::new(id, *title, prerequisites))
}

/// Splits a line on the delimiter.
///
/// An empty line has no fields, and a trailing delimiter does not start a
/// new field.
fn split_fields(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.strip_suffix(DELIMITER)
        .unwrap_or(line)
        .split(DELIMITER)
        .collect()
}

fn check_prerequisites(catalog: &Catalog) -> Result<(), ParseError> {
    let known: HashSet<&str> = catalog.courses().map(|c| c.id().as_str()).collect();

    for course in catalog.courses() {
        if let Some(missing) = course
            .prerequisites()
            .iter()
            .find(|prerequisite| !known.contains(prerequisite.as_str()))
        {
            return Err(ParseError::DanglingPrerequisite {
                prerequisite: missing.clone(),
                course: course.id().clone(),
            });
        }
    }
    Ok(())
}
