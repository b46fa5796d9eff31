//! Validation-error translation.
//!
//! Every rejection from the core validator becomes an HTTP 422 with a
//! structured body that names the offending field, a stable machine-readable
//! kind, and the human-readable explanation of the violated heuristic.

use asclepius_core::IntakeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// One violated rule, as reported to the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// The input field the rule applies to.
    pub field: &'static str,
    /// Stable identifier of the violated rule.
    pub kind: &'static str,
    /// Human-readable explanation of the violation.
    pub message: String,
}

/// Body of a 422 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub error: &'static str,
    pub message: &'static str,
    pub details: Vec<ErrorDetail>,
}

/// Wraps an [`IntakeError`] so handlers can bubble rejections with `?`.
#[derive(Debug)]
pub struct ValidationRejection(pub IntakeError);

impl From<IntakeError> for ValidationRejection {
    fn from(err: IntakeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let err = self.0;
        tracing::warn!(kind = err.kind(), field = err.field(), "validation rejected request: {err}");

        let body = ValidationErrorBody {
            error: "Validation Error",
            message: "Invalid input data provided",
            details: vec![ErrorDetail {
                field: err.field(),
                kind: err.kind(),
                message: err.to_string(),
            }],
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}
