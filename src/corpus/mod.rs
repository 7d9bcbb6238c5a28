//! Training corpus loading
//!
//! Scans a directory of labeled petition PDFs (`<CODE>_<name>.pdf`),
//! extracts and normalizes their text, and derives class labels from
//! the filename prefix. Files with an unknown code or no extractable
//! text are skipped with a warning; the batch continues.

mod relabel;

pub use relabel::{relabel_into, RelabelError};

use crate::content::PdfExtractor;
use crate::text::Normalizer;
use crate::types::{Specialty, UnknownSpecialty};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A loaded training corpus: normalized documents with aligned labels,
/// plus counters for what the scan skipped.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Normalized document texts
    pub documents: Vec<String>,
    /// Class indices aligned with `documents`
    pub labels: Vec<usize>,
    /// Number of PDF files seen
    pub scanned: usize,
    /// Files skipped because the filename code is unknown
    pub skipped_unlabeled: usize,
    /// Files skipped because no text could be extracted
    pub skipped_empty: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped_unlabeled + self.skipped_empty
    }
}

/// Derive the specialty from a training filename of the form `<CODE>_<rest>`.
///
/// Only the substring before the first underscore is inspected; `<rest>`
/// is not validated.
pub fn specialty_from_filename(name: &str) -> Result<Specialty, UnknownSpecialty> {
    let code = name.split('_').next().unwrap_or(name);
    code.parse()
}

/// Scan `dir` for `.pdf` files and build the training corpus.
///
/// Files are visited in filename order so repeated runs over the same
/// directory produce the same corpus.
pub fn load_corpus(dir: &Path, normalizer: &Normalizer) -> Result<Corpus> {
    let mut corpus = Corpus::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to scan training directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_pdf = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            continue;
        }

        corpus.scanned += 1;
        let name = entry.file_name().to_string_lossy().into_owned();

        let specialty = match specialty_from_filename(&name) {
            Ok(specialty) => specialty,
            Err(e) => {
                warn!("skipping {}: {}", name, e);
                corpus.skipped_unlabeled += 1;
                continue;
            }
        };

        let text = PdfExtractor::extract_file_lossy(entry.path());
        if text.is_empty() {
            warn!("skipping {}: no extractable text", name);
            corpus.skipped_empty += 1;
            continue;
        }

        debug!("loaded {} as {}", name, specialty);
        corpus.documents.push(normalizer.normalize(&text));
        corpus.labels.push(specialty.index());
    }

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_labeler_maps_all_known_codes() {
        for specialty in Specialty::ALL {
            let name = format!("{}_processo-123.pdf", specialty.code());
            assert_eq!(specialty_from_filename(&name), Ok(specialty));
        }
    }

    #[test]
    fn test_labeler_rejects_unknown_prefix() {
        assert!(specialty_from_filename("ZZZ_processo.pdf").is_err());
        // No underscore: the whole filename is taken as the code
        assert!(specialty_from_filename("PAS.pdf").is_err());
        // Lowercase codes are not accepted
        assert!(specialty_from_filename("pas_processo.pdf").is_err());
    }

    #[test]
    fn test_labeler_ignores_rest_of_filename() {
        assert_eq!(
            specialty_from_filename("PUMA_anything_at_all.pdf"),
            Ok(Specialty::Puma)
        );
    }

    #[test]
    fn test_scan_skips_unlabeled_and_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        // Unknown code: skipped before extraction is attempted
        fs::write(dir.path().join("XXX_a.pdf"), b"junk").unwrap();
        // Known code but not a real PDF: extraction yields empty text
        fs::write(dir.path().join("PAS_b.pdf"), b"junk").unwrap();
        // Not a PDF: ignored entirely
        fs::write(dir.path().join("notes.txt"), b"junk").unwrap();

        let normalizer = Normalizer::new();
        let corpus = load_corpus(dir.path(), &normalizer).unwrap();

        assert_eq!(corpus.scanned, 2);
        assert_eq!(corpus.skipped_unlabeled, 1);
        assert_eq!(corpus.skipped_empty, 1);
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_scan_of_missing_directory_fails() {
        let normalizer = Normalizer::new();
        assert!(load_corpus(Path::new("does/not/exist"), &normalizer).is_err());
    }
}
