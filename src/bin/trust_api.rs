//! Trust Scanner API Server
//!
//! REST API for contract trust scoring
//!
//! Usage:
//!   cargo run --bin trust_api
//!
//! Environment:
//!   SCANNER_PORT      - Server port (default: 8080, `PORT` takes precedence)
//!   SCANNER_HOST      - Server host (default: 0.0.0.0)
//!   TRUST_MODEL_PATH  - Classifier artifact (default: models/trust_model.json)
//!   CONTRACT_ABI_PATH - Contract ABI (default: models/contract_abi.json)
//!   RUST_LOG          - Log filter (default: info)

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trust_scanner::api::{create_router, AppState};
use trust_scanner::utils::constants::{APP_NAME, APP_VERSION};
use trust_scanner::{ScannerConfig, TelemetryCollector};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    info!("🛡️ {} v{}", APP_NAME, APP_VERSION);

    let config = ScannerConfig::from_env();
    let addr = config.bind_addr()?;

    let telemetry = Arc::new(TelemetryCollector::new());
    let telemetry_for_shutdown = telemetry.clone();

    // Loads classifier + ABI once; failures degrade to fallback mode
    let state = Arc::new(AppState::from_config(&config, telemetry));
    let app = create_router(state);

    info!("🚀 Trust Scanner API starting on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /analyze/  - Contract trust analysis");
    info!("  GET  /stats     - Scoring statistics");
    info!("  GET  /health    - Health check (reports fallback mode)");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 Shutdown signal received");
    let stats = telemetry_for_shutdown.get_stats();
    info!("   Total analyzed: {}", stats.total_analyzed);
    info!("   Model scored: {}, fallback scored: {}", stats.model_scored, stats.fallback_scored);
    info!("   Rejected: {}, failed: {}", stats.total_rejected, stats.total_failed);
    info!("👋 Trust Scanner shutdown complete");

    Ok(())
}
