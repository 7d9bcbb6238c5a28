//! PDF text extraction
//!
//! Extracts text content from PDF documents using pdf-extract. Text of
//! all pages is concatenated in page order.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// PDF content extractor
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract the text of every page of a PDF file, in page order.
    pub fn extract_file(path: &Path) -> Result<String> {
        let text = pdf_extract::extract_text(path)
            .with_context(|| format!("Failed to extract text from {}", path.display()))?;
        Ok(text)
    }

    /// Extract text, returning an empty string on any failure.
    ///
    /// Missing files, malformed documents and unreadable encodings are
    /// logged and collapsed into `""`; callers must treat an empty
    /// result as "extraction failed" and branch accordingly.
    pub fn extract_file_lossy(path: &Path) -> String {
        match Self::extract_file(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF extraction failed for {}: {:#}", path.display(), e);
                String::new()
            }
        }
    }
}
