//! Model persistence
//!
//! The single durable artifact of the service: the fitted pipeline
//! together with the train/test split it was fitted from, serialized
//! with bincode to one file. Saving overwrites; loading fails with
//! context when the file is absent or corrupt.

use crate::classifier::ClassifierPipeline;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The four ordered collections of an 80/20 corpus partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSplit {
    pub train_documents: Vec<String>,
    pub test_documents: Vec<String>,
    pub train_labels: Vec<usize>,
    pub test_labels: Vec<usize>,
}

impl DataSplit {
    pub fn save(&self, path: &Path) -> Result<()> {
        write_bincode(self, path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        read_bincode(path)
    }
}

/// The persisted trained model: fitted pipeline, the split it came
/// from, and when training happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub pipeline: ClassifierPipeline,
    pub split: DataSplit,
    pub trained_at: DateTime<Utc>,
}

impl ModelArtifact {
    pub fn save(&self, path: &Path) -> Result<()> {
        write_bincode(self, path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        read_bincode(path)
    }
}

fn write_bincode<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    let encoded = bincode::serialize(value).context("Failed to serialize model data")?;
    std::fs::write(path, encoded)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn read_bincode<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    bincode::deserialize(&bytes)
        .with_context(|| format!("Corrupt or incompatible model data in {}", path.display()))
}
