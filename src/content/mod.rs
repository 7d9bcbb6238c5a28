//! Content extraction module
//!
//! Turns petition documents on disk into raw text for the
//! classification pipeline.

mod pdf;

pub use pdf::PdfExtractor;
