use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// A course number, such as `CSCI200`.
///
/// Identifiers are compared and ordered as plain byte strings. The only
/// validation applied is that an identifier is not empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CourseId(NonEmptyString);

impl CourseId {
    /// Creates a new `CourseId` from a string.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCourseIdError` if the string is empty.
    pub fn new(s: String) -> Result<Self, EmptyCourseIdError> {
        NonEmptyString::new(s)
            .map(Self)
            .map_err(|_| EmptyCourseIdError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for CourseId {
    type Error = EmptyCourseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CourseId {
    type Error = EmptyCourseIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for CourseId {
    type Err = EmptyCourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for CourseId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for CourseId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CourseId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a course identifier is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("course identifier must not be empty")]
pub struct EmptyCourseIdError;

/// A single course in the catalog.
///
/// Courses are immutable once constructed. Prerequisites are kept in the
/// order they were listed in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    prerequisites: Vec<CourseId>,
}

impl Course {
    /// Creates a course.
    #[must_use]
    pub fn new(id: CourseId, title: impl Into<String>, prerequisites: Vec<CourseId>) -> Self {
        Self {
            id,
            title: title.into(),
            prerequisites,
        }
    }

    /// The course number.
    #[must_use]
    pub const fn id(&self) -> &CourseId {
        &self.id
    }

    /// The display name of the course.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The course numbers that must be completed before this course.
    #[must_use]
    pub fn prerequisites(&self) -> &[CourseId] {
        &self.prerequisites
    }

    /// Prerequisites joined with `", "`, or `None` if there are none.
    #[must_use]
    pub fn prerequisite_summary(&self) -> String {
        if self.prerequisites.is_empty() {
            return "None".to_string();
        }
        self.prerequisites
            .iter()
            .map(CourseId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
