//! HTTP API request/response types
//!
//! JSON-serializable types for the triage API, plus the mapping from
//! service errors to distinct non-200 responses.

use crate::corpus::RelabelError;
use crate::service::ServiceError;
use crate::types::Specialty;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Request body for `/classificar` (optional; falls back to the
/// configured intake PDF)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// PDF to classify instead of the configured intake path
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Request body for `/ajustar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelabelRequest {
    /// PDF to relabel instead of the configured intake path
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Corrected category code (one of the seven specialty codes)
    pub specialty: String,
}

/// Response for `/treino`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResponse {
    pub message: String,
    /// Documents that made it into the corpus
    pub documents: usize,
    /// Files skipped during the scan
    pub skipped: usize,
    /// Held-out evaluation report
    pub classification_report: String,
}

/// Response for `/classificar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub message: String,
    /// Predicted specialty code
    pub specialty: Specialty,
    /// The PDF that was classified
    pub path: PathBuf,
}

/// Response for `/ajustar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelabelResponse {
    pub message: String,
    /// Where the relabeled copy was placed
    pub destination: PathBuf,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

/// Map a service error to its HTTP status and JSON body.
pub fn service_error_response(err: &ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match err {
        ServiceError::TrainingDirMissing(_) => (StatusCode::NOT_FOUND, "TRAINING_DIR_MISSING"),
        ServiceError::CorpusTooSmall { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "CORPUS_TOO_SMALL")
        }
        ServiceError::NotTrained(_) => (StatusCode::CONFLICT, "NOT_TRAINED"),
        ServiceError::ExtractionFailed(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_FAILED")
        }
        ServiceError::UnknownSpecialty(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_SPECIALTY"),
        ServiceError::Relabel(RelabelError::SourceMissing(_)) => {
            (StatusCode::NOT_FOUND, "SOURCE_MISSING")
        }
        ServiceError::Relabel(RelabelError::DestinationMissing(_)) => {
            (StatusCode::NOT_FOUND, "DESTINATION_MISSING")
        }
        ServiceError::Relabel(RelabelError::Copy { .. }) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "COPY_FAILED")
        }
        ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    (status, Json(ErrorResponse::new(code, err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_distinct_statuses_per_error() {
        let not_trained = ServiceError::NotTrained(PathBuf::from("m.bin"));
        assert_eq!(service_error_response(&not_trained).0, StatusCode::CONFLICT);

        let missing = ServiceError::Relabel(RelabelError::SourceMissing(PathBuf::from("x.pdf")));
        assert_eq!(service_error_response(&missing).0, StatusCode::NOT_FOUND);

        let extraction = ServiceError::ExtractionFailed(PathBuf::from("x.pdf"));
        assert_eq!(
            service_error_response(&extraction).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_classify_response_serializes_specialty_code() {
        let response = ClassifyResponse {
            message: "ok".into(),
            specialty: Specialty::Pas,
            path: PathBuf::from("a.pdf"),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"specialty\":\"PAS\""));
    }

    #[test]
    fn test_classify_request_body_is_optional_fields() {
        let request: ClassifyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.path.is_none());
    }
}
