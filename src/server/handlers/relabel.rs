//! Relabeling handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use super::AppState;
use crate::server::types::{
    service_error_response, ErrorResponse, RelabelRequest, RelabelResponse,
};
use crate::types::Specialty;

/// `/ajustar`: copy a misclassified petition into the training
/// directory under the corrected category code.
pub async fn relabel(
    State(state): State<AppState>,
    body: Result<Json<RelabelRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "a JSON body with a 'specialty' code is required: {}",
                    rejection.body_text()
                ))),
            )
                .into_response();
        }
    };

    let specialty: Specialty = match request.specialty.parse() {
        Ok(specialty) => specialty,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("UNKNOWN_SPECIALTY", err.to_string())),
            )
                .into_response();
        }
    };

    let service = state.service.clone();
    let result =
        tokio::task::spawn_blocking(move || service.relabel(request.source.as_deref(), specialty))
            .await;

    match result {
        Ok(Ok(destination)) => (
            StatusCode::OK,
            Json(RelabelResponse {
                message: format!("petition added to the training corpus as {specialty}"),
                destination,
            }),
        )
            .into_response(),
        Ok(Err(err)) => {
            error!("relabeling failed: {err}");
            service_error_response(&err).into_response()
        }
        Err(join_err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_error(format!(
                "relabel task failed: {join_err}"
            ))),
        )
            .into_response(),
    }
}
