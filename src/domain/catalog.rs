//! The in-memory course catalog.
//!
//! The [`Catalog`] knows nothing about files. It partitions courses into a
//! fixed number of buckets keyed by course number, with linear chaining
//! inside each bucket.

use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Course, CourseId};

/// The number of buckets used when none is configured.
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(count) => count,
    None => unreachable!(),
};

/// Computes the bucket a course number is stored in.
///
/// The index is the sum of the identifier's character codes, modulo the
/// bucket count.
#[must_use]
pub fn bucket_index(id: &str, bucket_count: NonZeroUsize) -> usize {
    let sum = id
        .chars()
        .map(|c| c as usize)
        .fold(0usize, usize::wrapping_add);
    sum % bucket_count.get()
}

/// A fixed-size, bucketed mapping from course number to course.
///
/// The bucket count is chosen at construction and never changes. A catalog
/// is never edited in place after loading; reloading builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    bucket_count: NonZeroUsize,
    buckets: Vec<Vec<Course>>,
    len: usize,
}

/// Error returned when inserting a course whose number is already present.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("course {0} is already in the catalog")]
pub struct DuplicateCourseError(pub CourseId);

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl Catalog {
    /// Creates an empty catalog with the given number of buckets.
    #[must_use]
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        Self {
            bucket_count,
            buckets: vec![Vec::new(); bucket_count.get()],
            len: 0,
        }
    }

    /// The number of buckets.
    #[must_use]
    pub const fn bucket_count(&self) -> NonZeroUsize {
        self.bucket_count
    }

    /// The number of courses stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the catalog holds no courses.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn index_of(&self, id: &str) -> usize {
        bucket_index(id, self.bucket_count)
    }

    /// Inserts a course into its bucket.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCourseError` if a course with the same number is
    /// already stored. The catalog is left unchanged in that case.
    #[instrument(level = "trace", skip(self), fields(id = %course.id()))]
    pub fn insert(&mut self, course: Course) -> Result<(), DuplicateCourseError> {
        let index = self.index_of(course.id());
        let bucket = &mut self.buckets[index];

        if bucket.iter().any(|existing| existing.id() == course.id()) {
            return Err(DuplicateCourseError(course.id().clone()));
        }

        debug!(bucket = index, chain = bucket.len(), "inserting course");
        bucket.push(course);
        self.len += 1;
        Ok(())
    }

    /// Finds a course by number.
    ///
    /// Only the bucket the number hashes to is scanned.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.buckets[self.index_of(id)]
            .iter()
            .find(|course| course.id().as_str() == id)
    }

    /// Whether a course with the given number is stored.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Iterates over every course.
    ///
    /// Courses are yielded in bucket order, then in insertion order within
    /// each bucket. There is no other ordering guarantee; see
    /// [`sorted_listing`](crate::domain::sorted_listing) for an ordered view.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.buckets.iter().flatten()
    }

    /// The number of buckets holding at least one course.
    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }

    /// The length of the longest bucket chain.
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn id(s: &str) -> CourseId {
        s.parse().unwrap()
    }

    fn course(number: &str, title: &str) -> Course {
        Course::new(id(number), title, Vec::new())
    }

    fn buckets(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test_case("A", 100, 65; "single character")]
    #[test_case("AB", 100, 31; "sum wraps modulo count")]
    #[test_case("CS101", 100, 96; "course number")]
    #[test_case("CS101", 1, 0; "single bucket")]
    #[test_case("", 7, 0; "empty key")]
    fn bucket_index_sums_character_codes(key: &str, count: usize, expected: usize) {
        assert_eq!(bucket_index(key, buckets(count)), expected);
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.bucket_count().get(), 100);
        assert_eq!(catalog.courses().count(), 0);
        assert_eq!(catalog.longest_chain(), 0);
    }

    #[test]
    fn find_after_insert() {
        let mut catalog = Catalog::default();
        catalog.insert(course("CSCI100", "Intro")).unwrap();

        let found = catalog.find("CSCI100").unwrap();
        assert_eq!(found.title(), "Intro");
        assert!(catalog.contains("CSCI100"));
        assert!(catalog.find("CSCI200").is_none());
    }

    #[test]
    fn find_is_exact_match() {
        let mut catalog = Catalog::default();
        catalog.insert(course("CSCI100", "Intro")).unwrap();

        assert!(catalog.find("csci100").is_none());
        assert!(catalog.find("CSCI100 ").is_none());
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut catalog = Catalog::default();
        catalog.insert(course("CSCI100", "First")).unwrap();

        let error = catalog.insert(course("CSCI100", "Second")).unwrap_err();

        assert_eq!(error, DuplicateCourseError(id("CSCI100")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("CSCI100").unwrap().title(), "First");
    }

    #[test]
    fn colliding_keys_share_a_bucket() {
        // "AB" and "BA" have the same character sum.
        let mut catalog = Catalog::new(buckets(10));
        catalog.insert(course("AB", "first")).unwrap();
        catalog.insert(course("BA", "second")).unwrap();

        assert_eq!(catalog.occupied_buckets(), 1);
        assert_eq!(catalog.longest_chain(), 2);
        assert_eq!(catalog.find("AB").unwrap().title(), "first");
        assert_eq!(catalog.find("BA").unwrap().title(), "second");
    }

    #[test]
    fn courses_are_enumerated_in_bucket_order() {
        let mut catalog = Catalog::new(buckets(100));
        // 'B' = 66, 'A' = 65, "BA" = 131 -> 31
        catalog.insert(course("B", "b")).unwrap();
        catalog.insert(course("BA", "ba")).unwrap();
        catalog.insert(course("A", "a")).unwrap();

        let order: Vec<&str> = catalog.courses().map(|c| c.id().as_str()).collect();
        assert_eq!(order, ["BA", "A", "B"]);
    }

    #[test]
    fn single_bucket_degrades_to_a_list() {
        let mut catalog = Catalog::new(buckets(1));
        for number in ["C3", "C1", "C2"] {
            catalog.insert(course(number, number)).unwrap();
        }

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.longest_chain(), 3);
        let order: Vec<&str> = catalog.courses().map(|c| c.id().as_str()).collect();
        assert_eq!(order, ["C3", "C1", "C2"]);
        assert!(catalog.contains("C2"));
    }
}
