use std::{num::NonZeroUsize, path::Path};

use tracing::{info, instrument, warn};

use crate::Catalog;

pub mod loader;
pub mod parser;

pub use loader::{ReadError, read_lines};
pub use parser::{ParseError, parse_catalog};

/// Errors that can occur when loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// The file was read but contained no lines.
    #[error("{} contains no course records", .0.display())]
    Empty(std::path::PathBuf),
    /// The file contents are not a valid catalog.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Reads, parses and validates the catalog file at `path`.
///
/// Nothing is parsed unless the read produced at least one line. The
/// returned catalog is fully validated; there is no partial result.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is empty, or contains a
/// malformed record, a duplicate course or a dangling prerequisite.
#[instrument(level = "debug")]
pub fn load_catalog(path: &Path, bucket_count: NonZeroUsize) -> Result<Catalog, LoadError> {
    let lines = read_lines(path)?;
    if lines.is_empty() {
        warn!(path = %path.display(), "refusing to load an empty catalog");
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let catalog = parse_catalog(&lines, bucket_count)?;
    info!(
        path = %path.display(),
        courses = catalog.len(),
        "loaded course catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn buckets() -> NonZeroUsize {
        NonZeroUsize::new(100).unwrap()
    }

    #[test]
    fn loads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"CS101,Intro to CS,\nCS201,Data Structures,CS101\n")
            .unwrap();

        let catalog = load_catalog(file.path(), buckets()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("CS201").unwrap().prerequisites(), ["CS101"]);
    }

    #[test]
    fn empty_file_is_refused() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let error = load_catalog(file.path(), buckets()).unwrap_err();

        assert!(matches!(error, LoadError::Empty(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.csv");

        let error = load_catalog(&missing, buckets()).unwrap_err();

        assert!(matches!(error, LoadError::Read(ReadError::NotFound(_))));
    }

    #[test]
    fn parse_failures_are_propagated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"CS300,Advanced Topics,CS999\n").unwrap();

        let error = load_catalog(file.path(), buckets()).unwrap_err();

        assert_eq!(
            error.to_string(),
            "prerequisite CS999 for course CS300 does not exist"
        );
    }
}
