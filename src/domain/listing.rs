use std::fmt;

use crate::domain::{Catalog, Course, CourseId};

/// One row of the sorted course listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    /// The course number.
    pub id: &'a CourseId,
    /// The course's display name.
    pub title: &'a str,
}

impl<'a> From<&'a Course> for ListingEntry<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            id: course.id(),
            title: course.title(),
        }
    }
}

impl fmt::Display for ListingEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}

/// Lists every course in ascending course-number order.
///
/// Numbers are compared as plain strings, so `CSCI100` sorts before
/// `CSCI2`, and uppercase before lowercase.
pub fn sorted_listing(catalog: &Catalog) -> impl Iterator<Item = ListingEntry<'_>> {
    let mut courses: Vec<&Course> = catalog.courses().collect();
    courses.sort_by(|a, b| a.id().cmp(b.id()));
    courses.into_iter().map(ListingEntry::from)
}

/// The outcome of looking up a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    /// The course exists.
    Found(&'a Course),
    /// No course has the requested number.
    NotFound(&'a str),
}

impl<'a> Detail<'a> {
    /// Returns the course, if it was found.
    #[must_use]
    pub const fn course(&self) -> Option<&'a Course> {
        match *self {
            Self::Found(course) => Some(course),
            Self::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(course) => {
                writeln!(f, "Course Number: {}", course.id())?;
                writeln!(f, "Course Name: {}", course.title())?;
                write!(f, "Prerequisites: {}", course.prerequisite_summary())
            }
            Self::NotFound(id) => write!(f, "Course {id} not found."),
        }
    }
}

/// Looks up one course for display.
///
/// A missing course is an ordinary outcome, not an error.
#[must_use]
pub fn detail_view<'a>(catalog: &'a Catalog, id: &'a str) -> Detail<'a> {
    catalog
        .find(id)
        .map_or(Detail::NotFound(id), Detail::Found)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    fn id(s: &str) -> CourseId {
        s.parse().unwrap()
    }

    fn course(number: &str, title: &str, prerequisites: &[&str]) -> Course {
        Course::new(
            id(number),
            title,
            prerequisites.iter().map(|p| id(p)).collect(),
        )
    }

    fn catalog(courses: Vec<Course>) -> Catalog {
        let mut catalog = Catalog::new(NonZeroUsize::new(7).unwrap());
        for course in courses {
            catalog.insert(course).unwrap();
        }
        catalog
    }

    #[test]
    fn listing_is_sorted_by_course_number() {
        let catalog = catalog(vec![
            course("MATH201", "Discrete Mathematics", &[]),
            course("CSCI300", "Introduction to Algorithms", &[]),
            course("CSCI100", "Introduction to Computer Science", &[]),
            course("CSCI2", "Short Number", &[]),
            course("CSCI101", "Introduction to Programming in C++", &[]),
        ]);

        let lines: Vec<String> = sorted_listing(&catalog).map(|e| e.to_string()).collect();

        assert_eq!(
            lines,
            [
                "CSCI100, Introduction to Computer Science",
                "CSCI101, Introduction to Programming in C++",
                "CSCI2, Short Number",
                "CSCI300, Introduction to Algorithms",
                "MATH201, Discrete Mathematics",
            ]
        );
    }

    #[test]
    fn listing_of_empty_catalog_is_empty() {
        assert_eq!(sorted_listing(&Catalog::default()).count(), 0);
    }

    #[test]
    fn listing_is_non_decreasing_for_any_insertion_order() {
        let numbers = ["Z9", "A1", "M5", "a0", "B2", "AA", "A", "9Z"];
        for rotation in 0..numbers.len() {
            let mut rotated = numbers;
            rotated.rotate_left(rotation);
            let catalog = catalog(rotated.iter().map(|n| course(n, "title", &[])).collect());

            let listing: Vec<ListingEntry<'_>> = sorted_listing(&catalog).collect();

            assert_eq!(listing.len(), numbers.len());
            assert!(listing.windows(2).all(|pair| pair[0].id <= pair[1].id));
        }
    }

    #[test]
    fn detail_without_prerequisites_shows_none() {
        let catalog = catalog(vec![course(
            "CSCI100",
            "Introduction to Computer Science",
            &[],
        )]);

        let detail = detail_view(&catalog, "CSCI100");

        assert_eq!(
            detail.to_string(),
            "Course Number: CSCI100\nCourse Name: Introduction to Computer \
             Science\nPrerequisites: None"
        );
    }

    #[test]
    fn detail_lists_prerequisites_in_file_order() {
        let catalog = catalog(vec![
            course("MATH201", "Discrete Mathematics", &[]),
            course("CSCI100", "Introduction to Computer Science", &[]),
            course(
                "CSCI301",
                "Advanced Programming in C++",
                &["MATH201", "CSCI100"],
            ),
        ]);

        let detail = detail_view(&catalog, "CSCI301");

        assert_eq!(
            detail.course().unwrap().prerequisites(),
            ["MATH201", "CSCI100"]
        );
        assert!(
            detail
                .to_string()
                .ends_with("Prerequisites: MATH201, CSCI100")
        );
    }

    #[test]
    fn unknown_course_is_not_found() {
        let catalog = catalog(vec![course(
            "CSCI100",
            "Introduction to Computer Science",
            &[],
        )]);

        let detail = detail_view(&catalog, "CSCI999");

        assert_eq!(detail, Detail::NotFound("CSCI999"));
        assert!(detail.course().is_none());
        assert_eq!(detail.to_string(), "Course CSCI999 not found.");
    }
}
