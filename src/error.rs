//! Error types for the transcript extraction engine.
//!
//! Extraction is deliberately lenient: unmatched lines are skipped, optional
//! fields degrade to absent, and excluded records are counted rather than
//! reported. Only a document with no recoverable text at all fails.

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during transcript extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No text of any kind could be recovered from the document.
    ///
    /// Returned when the reconstructed line sequence is empty and every
    /// full-text extractor came back empty as well.
    #[error("document contains no extractable text")]
    EmptyDocument,

    /// IO error (reading a text dump in the diagnostic binary)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
