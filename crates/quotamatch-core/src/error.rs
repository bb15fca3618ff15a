//! Error types for the quotamatch-core library.

use thiserror::Error;

/// Main error type for the quotamatch library.
#[derive(Error, Debug)]
pub enum QuotamatchError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Roster payload error.
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF document.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to the caller-supplied roster.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The roster payload could not be parsed as a member list.
    #[error("malformed roster payload: {0}")]
    Malformed(String),
}

/// Result type for the quotamatch library.
pub type Result<T> = std::result::Result<T, QuotamatchError>;
