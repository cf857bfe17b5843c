//! Error types for mdblog library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdblog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mdblog library.
///
/// Markdown conversion itself never fails; every variant here comes from
/// touching the filesystem.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A Markdown document could not be read.
    #[error("Could not open markdown file {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    /// A page template could not be read.
    #[error("Could not open template file {}: {source}", path.display())]
    Template { path: PathBuf, source: io::Error },

    /// A generated file could not be written.
    #[error("Could not create output file {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    /// The stylesheet could not be copied into the output directory.
    #[error("Failed to copy stylesheet {} to {}: {source}", from.display(), to.display())]
    Stylesheet {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// The pages directory could not be listed.
    #[error("Could not read pages directory {}: {source}", path.display())]
    PagesDir { path: PathBuf, source: io::Error },

    /// Required file or directory is missing.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),
}
