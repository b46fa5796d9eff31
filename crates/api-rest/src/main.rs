//! Asclepius REST API server binary.
//!
//! Serves the symptom-intake endpoints with OpenAPI/Swagger UI on the
//! configured address.

use api_rest::{router, AppState};
use asclepius_core::TriageService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Asclepius REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000) with OpenAPI/Swagger documentation at `/swagger-ui`.
///
/// # Environment Variables
/// - `ASCLEPIUS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Returns
/// * `Ok(())` - If server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("asclepius_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("ASCLEPIUS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Asclepius REST API on {}", addr);

    let state = AppState {
        triage: TriageService::new(),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
