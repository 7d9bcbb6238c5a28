//! Training handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use super::AppState;
use crate::server::types::{service_error_response, ErrorResponse, TrainResponse};

/// `/treino`: scan the training directory, fit the pipeline, persist
/// the model, and return the held-out evaluation report.
pub async fn train(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.clone();
    match tokio::task::spawn_blocking(move || service.train()).await {
        Ok(Ok(outcome)) => (
            StatusCode::OK,
            Json(TrainResponse {
                message: "model trained successfully".to_string(),
                documents: outcome.documents,
                skipped: outcome.skipped,
                classification_report: outcome.report,
            }),
        )
            .into_response(),
        Ok(Err(err)) => {
            error!("training failed: {err}");
            service_error_response(&err).into_response()
        }
        Err(join_err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_error(format!(
                "training task failed: {join_err}"
            ))),
        )
            .into_response(),
    }
}
