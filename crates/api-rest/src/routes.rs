//! HTTP endpoints and router assembly.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Json, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use asclepius_core::{
    DiagnosisResponse, HistoryEntry, PatientCategory, SeverityTier, SymptomDuration, SymptomInput,
    TriageService, UrgencyLevel,
};
use asclepius_types::{HeartRate, Severity, TemperatureF};

use crate::error::{ErrorDetail, ValidationErrorBody, ValidationRejection};

/// Application state shared across REST API handlers
///
/// Holds the triage service; all request handlers share the same underlying
/// diagnosis history through it.
#[derive(Clone)]
pub struct AppState {
    pub triage: TriageService,
}

#[derive(OpenApi)]
#[openapi(
    paths(root, health, echo, diagnose, get_history, clear_history),
    components(schemas(
        ServiceInfo,
        HealthRes,
        EchoResponse,
        SymptomInput,
        SymptomDuration,
        Severity,
        HeartRate,
        TemperatureF,
        DiagnosisResponse,
        SeverityTier,
        UrgencyLevel,
        PatientCategory,
        HistoryEntry,
        ValidationErrorBody,
        ErrorDetail,
    ))
)]
struct ApiDoc;

/// Service banner returned from the root endpoint.
#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub status: &'static str,
    pub service: &'static str,
}

/// What the echo endpoint sends back to the caller.
#[derive(Serialize, ToSchema)]
pub struct EchoResponse {
    pub received_symptoms: String,
    pub received_duration: Option<String>,
    pub received_severity: Option<u8>,
    pub message: String,
}

/// Builds the full REST router with middleware and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/echo", post(echo))
        .route("/diagnose", post(diagnose))
        .route("/history", get(get_history))
        .route("/history", delete(clear_history))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(track_process_time))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Records handler wall time in an `X-Process-Time` response header.
async fn track_process_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.5}")) {
        response.headers_mut().insert("x-process-time", value);
    }
    response
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = ServiceInfo)
    )
)]
/// Root endpoint with a service banner
///
/// # Returns
/// * `Json<ServiceInfo>` - Service name, status, and version
#[axum::debug_handler]
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Asclepius API is running",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        status: "healthy",
        service: "asclepius-api",
    })
}

#[utoipa::path(
    post,
    path = "/echo",
    request_body = SymptomInput,
    responses(
        (status = 200, description = "Echo of the validated submission", body = EchoResponse),
        (status = 422, description = "Validation error", body = ValidationErrorBody)
    )
)]
/// Echo back a validated symptom submission
///
/// Runs the full validation chain and returns the fields as received. Useful
/// for callers integrating against the intake format.
///
/// # Errors
/// Returns `422 Unprocessable Entity` if:
/// - the record fails any validation rule.
#[axum::debug_handler]
async fn echo(
    State(_state): State<AppState>,
    Json(input): Json<SymptomInput>,
) -> Result<Json<EchoResponse>, ValidationRejection> {
    let record = asclepius_core::validation::validate(input)?;

    let preview: String = record.symptoms().chars().take(50).collect();
    Ok(Json(EchoResponse {
        received_symptoms: record.symptoms().to_owned(),
        received_duration: record.duration().map(|d| d.as_str().to_owned()),
        received_severity: record.severity().map(|s| s.get()),
        message: format!("Received your symptoms: {preview}..."),
    }))
}

#[utoipa::path(
    post,
    path = "/diagnose",
    request_body = SymptomInput,
    responses(
        (status = 200, description = "Diagnosis for the submitted record", body = DiagnosisResponse),
        (status = 422, description = "Validation error", body = ValidationErrorBody)
    )
)]
/// Diagnose a symptom submission
///
/// Validates the record, derives the risk score and triage category, appends
/// the result to the diagnosis history, and returns the combined diagnosis.
///
/// # Errors
/// Returns `422 Unprocessable Entity` if:
/// - the record fails any validation rule.
#[axum::debug_handler]
async fn diagnose(
    State(state): State<AppState>,
    Json(input): Json<SymptomInput>,
) -> Result<Json<DiagnosisResponse>, ValidationRejection> {
    let diagnosis = state.triage.diagnose(input)?;
    Ok(Json(diagnosis))
}

#[utoipa::path(
    get,
    path = "/history",
    responses(
        (status = 200, description = "All past diagnoses in insertion order", body = [HistoryEntry])
    )
)]
/// List all past diagnoses
///
/// # Returns
/// * `Json<Vec<HistoryEntry>>` - Recorded diagnoses, oldest first
#[axum::debug_handler]
async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    Json(state.triage.history())
}

#[utoipa::path(
    delete,
    path = "/history",
    responses(
        (status = 204, description = "History cleared")
    )
)]
/// Clear the diagnosis history
///
/// Administrative endpoint; idempotent. Resets the id sequence, so the next
/// diagnosis is assigned id 1 again.
#[axum::debug_handler]
async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.triage.clear_history();
    StatusCode::NO_CONTENT
}
