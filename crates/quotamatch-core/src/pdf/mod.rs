//! PDF page text source.

mod source;

pub use source::PdfPageSource;

use crate::error::PdfError;

/// Text content of a single statement page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Layout text for the page, if any could be extracted.
    pub text: Option<String>,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for page text sources.
///
/// Yields plain text per page in document order; pages without a text
/// layer yield no text and are skipped by the matching pipeline.
pub trait PageTextSource {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<Option<String>>;

    /// Extract all pages in document order.
    fn extract_pages(&self) -> Result<Vec<StatementPage>>;
}
