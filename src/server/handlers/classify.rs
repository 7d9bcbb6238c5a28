//! Classification handler

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, error};

use super::AppState;
use crate::server::types::{
    service_error_response, ClassifyRequest, ClassifyResponse, ErrorResponse,
};

/// `/classificar`: predict the specialty of one petition PDF.
///
/// The body is optional; without one the configured intake PDF is
/// classified.
pub async fn classify(
    State(state): State<AppState>,
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match body {
        Ok(Json(request)) => request,
        // No body at all: fall back to the configured intake PDF
        Err(JsonRejection::MissingJsonContentType(_)) => ClassifyRequest::default(),
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    debug!("classify request: path={:?}", request.path);

    let service = state.service.clone();
    let result =
        tokio::task::spawn_blocking(move || service.classify(request.path.as_deref())).await;

    match result {
        Ok(Ok(outcome)) => (
            StatusCode::OK,
            Json(ClassifyResponse {
                message: format!("petition routed to specialty {}", outcome.specialty),
                specialty: outcome.specialty,
                path: outcome.path,
            }),
        )
            .into_response(),
        Ok(Err(err)) => {
            error!("classification failed: {err}");
            service_error_response(&err).into_response()
        }
        Err(join_err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_error(format!(
                "classification task failed: {join_err}"
            ))),
        )
            .into_response(),
    }
}
