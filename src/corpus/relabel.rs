//! Relabeling utility
//!
//! Copies a misclassified petition into the training directory under a
//! corrected category prefix, making it discoverable as a new training
//! example on the next training run.

use crate::types::Specialty;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from the relabel utility.
#[derive(Debug, Error)]
pub enum RelabelError {
    #[error("source file {0} does not exist")]
    SourceMissing(PathBuf),
    #[error("destination directory {0} does not exist")]
    DestinationMissing(PathBuf),
    #[error("failed to copy {source} to {destination}")]
    Copy {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        io: std::io::Error,
    },
}

/// Copy `source` into `training_dir` as `<CODE>_<original file name>`.
///
/// Both the source file and the destination directory must already
/// exist. There is no duplicate detection: relabeling the same file
/// twice overwrites the previous copy.
pub fn relabel_into(
    source: &Path,
    training_dir: &Path,
    specialty: Specialty,
) -> Result<PathBuf, RelabelError> {
    if !source.is_file() {
        return Err(RelabelError::SourceMissing(source.to_path_buf()));
    }
    if !training_dir.is_dir() {
        return Err(RelabelError::DestinationMissing(training_dir.to_path_buf()));
    }

    let file_name = source
        .file_name()
        .ok_or_else(|| RelabelError::SourceMissing(source.to_path_buf()))?;
    let destination =
        training_dir.join(format!("{}_{}", specialty.code(), file_name.to_string_lossy()));

    std::fs::copy(source, &destination).map_err(|io| RelabelError::Copy {
        source: source.to_path_buf(),
        destination: destination.clone(),
        io,
    })?;

    info!(
        "relabeled {} as {} into {}",
        source.display(),
        specialty,
        destination.display()
    );
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_copy_with_code_prefix() {
        let src_dir = tempfile::tempdir().unwrap();
        let train_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("processo.pdf");
        fs::write(&source, b"conteudo").unwrap();

        let dest = relabel_into(&source, train_dir.path(), Specialty::Ppe).unwrap();

        assert_eq!(dest, train_dir.path().join("PPE_processo.pdf"));
        assert_eq!(fs::read(&dest).unwrap(), b"conteudo");
        // Source stays in place
        assert!(source.is_file());
    }

    #[test]
    fn test_missing_source_is_typed_error() {
        let train_dir = tempfile::tempdir().unwrap();
        let err = relabel_into(
            Path::new("nowhere/processo.pdf"),
            train_dir.path(),
            Specialty::Pas,
        )
        .unwrap_err();
        assert!(matches!(err, RelabelError::SourceMissing(_)));
    }

    #[test]
    fn test_missing_destination_leaves_filesystem_untouched() {
        let src_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("processo.pdf");
        fs::write(&source, b"conteudo").unwrap();

        let missing = src_dir.path().join("no-such-dir");
        let err = relabel_into(&source, &missing, Specialty::Pas).unwrap_err();

        assert!(matches!(err, RelabelError::DestinationMissing(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_relabel_twice_overwrites() {
        let src_dir = tempfile::tempdir().unwrap();
        let train_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("processo.pdf");

        fs::write(&source, b"v1").unwrap();
        relabel_into(&source, train_dir.path(), Specialty::Ptr).unwrap();
        fs::write(&source, b"v2").unwrap();
        let dest = relabel_into(&source, train_dir.path(), Specialty::Ptr).unwrap();

        assert_eq!(fs::read(dest).unwrap(), b"v2");
    }
}
