//! API Request/Response Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{AppError, TrustAssessment, TrustStatus};
use crate::utils::telemetry::TelemetryStats;

/// API Response wrapper used by the operational endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Flat error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Status from the error code, body carries only the message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::new(self.message))).into_response()
    }
}

// ============================================
// Contract Analysis
// ============================================

/// Successful analysis body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub address: String,
    pub score: u8,
    pub status: TrustStatus,
}

impl AnalyzeResponse {
    pub fn new(address: String, assessment: &TrustAssessment) -> Self {
        Self {
            address,
            score: assessment.score,
            status: assessment.status,
        }
    }
}

// ============================================
// Stats / Telemetry
// ============================================

#[derive(Debug, Serialize)]
pub struct StatsData {
    #[serde(flatten)]
    pub stats: TelemetryStats,
    pub uptime_seconds: u64,
    pub api_version: String,
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    /// "healthy" with a classifier, "degraded" in fallback mode
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_loaded: bool,
    pub fallback_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub abi_loaded: bool,
    pub abi_functions: usize,
    pub abi_events: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_app_error_response() {
        let (status, body) = render(AppError::bad_request("missing address")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ErrorBody::new("missing address"));

        let (status, body) = render(AppError::internal("scoring failed")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "scoring failed");
    }

    #[tokio::test]
    async fn test_error_source_not_leaked() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "secret path");
        let err = AppError::with_source(crate::models::ErrorCode::ModelInferenceFailed, "boom", io);
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "boom");
    }
}
