//! Course Catalog Advising
//!
//! A course catalog is a comma-separated text file. It is loaded into an
//! in-memory [`Catalog`] and queried by course number.

pub mod domain;
pub use domain::{
    Catalog, Config, Course, CourseId, Detail, ListingEntry, detail_view, sorted_listing,
};

/// Reading and parsing catalog files.
pub mod storage;
pub use storage::{LoadError, ParseError, ReadError, load_catalog};
