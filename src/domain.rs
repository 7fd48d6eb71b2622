//! Domain models for the course catalog.
//!
//! This module contains the course types, the bucketed catalog they are
//! stored in, the read-only query views and configuration.

/// Course records and identifiers.
pub mod course;
pub use course::{Course, CourseId, EmptyCourseIdError};

/// The keyed lookup structure courses are stored in.
pub mod catalog;
pub use catalog::{Catalog, DuplicateCourseError};

mod config;
pub use config::Config;

/// Sorted listings and single-course detail views.
pub mod listing;
pub use listing::{Detail, ListingEntry, detail_view, sorted_listing};
