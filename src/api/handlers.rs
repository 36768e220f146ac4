//! API Request Handlers

use axum::extract::{rejection::JsonRejection, Json, State};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::types::*;
use crate::core::{load_classifier, load_contract_abi, ContractInterface, TrustScorer};
use crate::models::{AppError, ScannerConfig};
use crate::utils::constants::{
    ADDRESS_PREFIX, APP_VERSION, INVALID_ADDRESS_MESSAGE, SCORING_FAILED_MESSAGE,
};
use crate::utils::telemetry::TelemetryCollector;

/// Shared application state, immutable after startup
pub struct AppState {
    pub scorer: TrustScorer,
    pub contract: Option<Arc<ContractInterface>>,
    pub telemetry: Arc<TelemetryCollector>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        scorer: TrustScorer,
        contract: Option<Arc<ContractInterface>>,
        telemetry: Arc<TelemetryCollector>,
    ) -> Self {
        Self {
            scorer,
            contract,
            telemetry,
            start_time: Instant::now(),
        }
    }

    /// Load startup artifacts named by the config. Never fails: missing
    /// artifacts leave the service in fallback mode.
    pub fn from_config(config: &ScannerConfig, telemetry: Arc<TelemetryCollector>) -> Self {
        let scorer = TrustScorer::new(load_classifier(&config.model_path));
        if !scorer.has_model() {
            warn!("⚠️ Fallback scoring active: every request uses the heuristic");
        }
        let contract = load_contract_abi(&config.abi_path);
        Self::new(scorer, contract, telemetry)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();
    let model_loaded = state.scorer.has_model();

    let data = HealthData {
        status: if model_loaded { "healthy" } else { "degraded" }.to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        model_loaded,
        fallback_active: !model_loaded,
        model: state.scorer.model_description(),
        abi_loaded: state.contract.is_some(),
        abi_functions: state.contract.as_ref().map_or(0, |c| c.function_count()),
        abi_events: state.contract.as_ref().map_or(0, |c| c.event_count()),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Stats
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsData>> {
    let start = Instant::now();

    let data = StatsData {
        stats: state.telemetry.get_stats(),
        uptime_seconds: state.uptime_seconds(),
        api_version: APP_VERSION.to_string(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Contract Analysis
// ============================================

/// `address` field if it is a string carrying the hex prefix
pub fn extract_address(body: &Value) -> Option<&str> {
    body.get("address")
        .and_then(Value::as_str)
        .filter(|addr| addr.starts_with(ADDRESS_PREFIX))
}

pub async fn analyze_contract(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let start = Instant::now();

    let address = match payload {
        Ok(Json(body)) => extract_address(&body).map(str::to_owned),
        Err(rejection) => {
            debug!(reason = %rejection, "Unreadable analyze body");
            None
        }
    };

    let Some(address) = address else {
        debug!("Rejected analyze request: missing or malformed address");
        state.telemetry.record_rejected();
        return Err(AppError::bad_request(INVALID_ADDRESS_MESSAGE));
    };

    info!("🔎 Analyzing address: {}", address);

    let assessment = state.scorer.assess(&address).map_err(|e| {
        error!(code = e.code_str(), address = %address, "Scoring failed: {}", e);
        state.telemetry.record_failure();
        AppError::internal(SCORING_FAILED_MESSAGE)
    })?;

    state
        .telemetry
        .record_assessment(&assessment, start.elapsed().as_micros() as u64);

    info!(
        path = assessment.path.as_str(),
        "📊 Prediction complete - Score: {}, Status: {} {}",
        assessment.score,
        assessment.status,
        assessment.status.emoji()
    );

    Ok(Json(AnalyzeResponse::new(address, &assessment)))
}
