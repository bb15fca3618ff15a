//! PDF text extraction using lopdf, with a pdf-extract fallback.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PageTextSource, Result, StatementPage};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Page text source backed by lopdf.
pub struct PdfPageSource {
    document: Option<Document>,
    raw_data: Vec<u8>,
    config: PdfConfig,
}

impl PdfPageSource {
    /// Create a new page source with default configuration.
    pub fn new() -> Self {
        Self::with_config(PdfConfig::default())
    }

    pub fn with_config(config: PdfConfig) -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            config,
        }
    }

    /// Whole-document text via pdf-extract. Used when the per-page content
    /// streams defeat lopdf's text extraction.
    fn extract_text_fallback(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

impl Default for PdfPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextSource for PdfPageSource {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Some bank statements ship with empty-password encryption.
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_text(&self, page: u32) -> Result<Option<String>> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        let text = doc
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn extract_pages(&self) -> Result<Vec<StatementPage>> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_count as usize);
        let mut total_len = 0;

        for number in 1..=page_count {
            let text = match self.extract_page_text(number) {
                Ok(text) => text,
                Err(e) => {
                    // A broken page must not abort the document.
                    warn!("page {}: text extraction failed: {}", number, e);
                    None
                }
            };
            total_len += text.as_deref().map(str::len).unwrap_or(0);
            pages.push(StatementPage { number, text });
        }

        if total_len < self.config.min_text_length {
            match self.extract_text_fallback() {
                Ok(text) if text.trim().len() >= self.config.min_text_length => {
                    debug!("using pdf-extract fallback ({} chars)", text.len());
                    return Ok(vec![StatementPage {
                        number: 1,
                        text: Some(text),
                    }]);
                }
                Ok(_) => {}
                Err(e) => warn!("pdf-extract fallback failed: {}", e),
            }
        }

        Ok(pages)
    }
}
