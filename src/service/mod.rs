//! Triage operations
//!
//! `TriageService` is the operation layer shared by the HTTP handlers
//! and the CLI: training, classification and relabeling over one
//! configuration. The trained model lives behind a read/write lock
//! with training as the single writer; classification takes cheap
//! read snapshots and never refits.

use crate::classifier::{classification_report, train_test_split, ClassifierPipeline};
use crate::config::Config;
use crate::content::PdfExtractor;
use crate::corpus::{self, RelabelError};
use crate::model::{DataSplit, ModelArtifact};
use crate::text::Normalizer;
use crate::types::{Specialty, UnknownSpecialty};
use anyhow::anyhow;
use chrono::Utc;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the triage operations.
///
/// Each variant maps to a distinct HTTP status in the server layer, so
/// a failed operation is never reported as success.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("training directory {0} does not exist")]
    TrainingDirMissing(PathBuf),
    #[error("training corpus in {dir} has {usable} usable documents; at least 2 are required")]
    CorpusTooSmall { dir: PathBuf, usable: usize },
    #[error("no trained model at {0}; run training first")]
    NotTrained(PathBuf),
    #[error("could not extract any text from {0}")]
    ExtractionFailed(PathBuf),
    #[error(transparent)]
    UnknownSpecialty(#[from] UnknownSpecialty),
    #[error(transparent)]
    Relabel(#[from] RelabelError),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Result of a training run.
#[derive(Debug)]
pub struct TrainOutcome {
    /// Documents that made it into the corpus
    pub documents: usize,
    /// Files skipped (unknown code or no extractable text)
    pub skipped: usize,
    /// Held-out evaluation report
    pub report: String,
    /// Where the model artifact was persisted
    pub model_path: PathBuf,
}

/// Result of classifying one petition.
#[derive(Debug)]
pub struct ClassifyOutcome {
    pub specialty: Specialty,
    pub path: PathBuf,
}

/// The operation layer shared by HTTP handlers and CLI commands.
pub struct TriageService {
    config: Config,
    normalizer: Normalizer,
    model: RwLock<Option<Arc<ModelArtifact>>>,
}

impl TriageService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
            model: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Train from the configured directory of labeled PDFs, persist the
    /// fitted model, and swap it into the in-memory slot.
    pub fn train(&self) -> Result<TrainOutcome, ServiceError> {
        let dir = &self.config.paths.training_dir;
        if !dir.is_dir() {
            return Err(ServiceError::TrainingDirMissing(dir.clone()));
        }

        let corpus = corpus::load_corpus(dir, &self.normalizer)?;
        info!(
            "corpus loaded: {} documents, {} skipped (of {} PDFs scanned)",
            corpus.len(),
            corpus.skipped(),
            corpus.scanned
        );
        if corpus.len() < 2 {
            return Err(ServiceError::CorpusTooSmall {
                dir: dir.clone(),
                usable: corpus.len(),
            });
        }

        let documents = corpus.len();
        let skipped = corpus.skipped();
        let pipeline_config = &self.config.pipeline;
        let (train_documents, test_documents, train_labels, test_labels) = train_test_split(
            corpus.documents,
            corpus.labels,
            pipeline_config.test_fraction,
            pipeline_config.split_seed,
        );
        let split = DataSplit {
            train_documents,
            test_documents,
            train_labels,
            test_labels,
        };

        let mut pipeline =
            ClassifierPipeline::new(pipeline_config.max_vocabulary, pipeline_config.smoothing);
        pipeline.fit(&split.train_documents, &split.train_labels);

        let predictions = split
            .test_documents
            .iter()
            .map(|document| pipeline.predict(document))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ServiceError::Internal(e.into()))?;
        let report = classification_report(&split.test_labels, &predictions);

        let artifact = ModelArtifact {
            pipeline,
            split,
            trained_at: Utc::now(),
        };
        let model_path = self.config.paths.model_path.clone();
        artifact.save(&model_path)?;

        let artifact = Arc::new(artifact);
        *self.model.write() = Some(artifact);
        info!("model trained and persisted to {}", model_path.display());

        Ok(TrainOutcome {
            documents,
            skipped,
            report,
            model_path,
        })
    }

    /// Classify one petition PDF against the current trained model.
    ///
    /// `path` overrides the configured intake PDF. The model is read
    /// from memory when present, otherwise loaded once from disk.
    pub fn classify(&self, path: Option<&Path>) -> Result<ClassifyOutcome, ServiceError> {
        let path = path
            .unwrap_or(&self.config.paths.intake_pdf)
            .to_path_buf();
        let model = self.current_model()?;

        let text = PdfExtractor::extract_file_lossy(&path);
        if text.is_empty() {
            return Err(ServiceError::ExtractionFailed(path));
        }

        let normalized = self.normalizer.normalize(&text);
        let label = model
            .pipeline
            .predict(&normalized)
            .map_err(|e| ServiceError::Internal(e.into()))?;
        let specialty = Specialty::from_index(label).ok_or_else(|| {
            ServiceError::Internal(anyhow!("classifier produced unknown class index {label}"))
        })?;

        info!("classified {} as {}", path.display(), specialty);
        Ok(ClassifyOutcome { specialty, path })
    }

    /// Copy a petition into the training directory under a corrected
    /// category prefix.
    pub fn relabel(
        &self,
        source: Option<&Path>,
        specialty: Specialty,
    ) -> Result<PathBuf, ServiceError> {
        let source = source.unwrap_or(&self.config.paths.intake_pdf);
        let destination =
            corpus::relabel_into(source, &self.config.paths.training_dir, specialty)?;
        Ok(destination)
    }

    fn current_model(&self) -> Result<Arc<ModelArtifact>, ServiceError> {
        if let Some(model) = self.model.read().clone() {
            return Ok(model);
        }

        let path = &self.config.paths.model_path;
        if !path.is_file() {
            return Err(ServiceError::NotTrained(path.clone()));
        }
        let artifact = Arc::new(ModelArtifact::load(path)?);

        let mut slot = self.model.write();
        if let Some(model) = slot.clone() {
            // another request loaded it first
            return Ok(model);
        }
        *slot = Some(artifact.clone());
        Ok(artifact)
    }
}
