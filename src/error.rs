//! Error types for the markpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for markpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during markup extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document has no pages.
    ///
    /// Distinct from an extraction failure so callers can tell the user
    /// the document was empty rather than show a blank result.
    #[error("document has no pages")]
    EmptyDocument,

    /// The external PDF layer failed to produce text for a page.
    ///
    /// Fatal for the whole document: no partial output is returned.
    #[error("failed to extract text from page {page}: {message}")]
    PageExtraction {
        /// 1-indexed page number where extraction failed.
        page: u32,
        /// Description of the underlying failure.
        message: String,
    },

    /// A fragment dump could not be deserialized.
    #[error("invalid fragment dump: {0}")]
    InvalidDump(String),

    /// The question-extraction endpoint failed or returned a malformed payload.
    #[cfg(feature = "quiz")]
    #[error("question extraction error: {0}")]
    Llm(String),
}

impl Error {
    /// Wrap an arbitrary failure as a page extraction error, keeping an
    /// existing page attribution intact.
    pub(crate) fn for_page(page: u32, err: Error) -> Error {
        match err {
            e @ Error::PageExtraction { .. } => e,
            e => Error::PageExtraction {
                page,
                message: e.to_string(),
            },
        }
    }
}
