//! Error types for strata.
//!
//! Segmentation itself never fails: an empty region is a normal outcome.
//! Errors come only from reading documents and writing regions.

use std::path::PathBuf;

/// A document could not be read into paragraphs.
///
/// Raised by a [`ParagraphSource`](crate::ParagraphSource). The batch driver
/// reports it for that one document and moves on.
#[derive(Debug, thiserror::Error)]
pub enum DocumentReadError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The document path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    Encoding {
        /// The document path.
        path: PathBuf,
    },

    /// A JSON document is not an array of strings.
    #[error("malformed JSON document {path}: {source}")]
    Json {
        /// The document path.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No source handles this file's extension.
    #[error("unsupported document format: {path}")]
    Unsupported {
        /// The document path.
        path: PathBuf,
    },
}

/// Errors from batch processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A document could not be read.
    #[error(transparent)]
    Read(#[from] DocumentReadError),

    /// A region could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Another input with the same file stem already owns the output names.
    #[error("{path} has the same name as {first}; skipped to keep its outputs")]
    DuplicateName {
        /// The skipped input.
        path: PathBuf,
        /// The input that keeps the name.
        first: PathBuf,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input directory could not be listed.
    #[error("failed to list directory {path}: {source}")]
    ListDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for strata operations.
pub type Result<T> = std::result::Result<T, Error>;
