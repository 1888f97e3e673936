//! Report generation route.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;
use tracing::error;

use crate::AppState;
use abaco_core::report::{ReportError, ReportRequest};
use abaco_shared::AppError;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports", post(generate_report))
}

/// Generate one report from a tally payload.
///
/// A malformed body is rejected by the `Json` extractor before any
/// document work starts; a render or storage failure surfaces as a
/// single error message with no partial artifact.
async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> impl IntoResponse {
    match state.reports.generate(&request).await {
        Ok(generated) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Relatório gerado com sucesso!",
                "filename": generated.filename,
                "grand_total": generated.grand_total,
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to generate report");
            let app_error = to_app_error(&e);
            let status = StatusCode::from_u16(app_error.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(json!({
                    "status": "error",
                    "error": app_error.error_code(),
                    "message": app_error.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Maps core report errors onto the shared API error taxonomy.
fn to_app_error(error: &ReportError) -> AppError {
    match error {
        ReportError::Render(e) => AppError::Rendering(e.to_string()),
        ReportError::Storage(e) => AppError::Storage(e.to_string()),
    }
}
