//! Reading catalog files line by line.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::instrument;

/// Errors that can occur when reading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// No file exists at the path.
    #[error("unable to open {}: file not found", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be opened or read.
    #[error("unable to read {}: {source}", path.display())]
    Unreadable {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Reads a text file into its lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped. The file is closed before
/// this function returns, whether or not reading succeeded.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read as text.
#[instrument(level = "debug")]
pub fn read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let unreadable = |source| ReadError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        _ => unreadable(io_error),
    })?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(unreadable)
}
