//! Telemetry Module for Trust Scanner
//!
//! In-memory counters for the `/stats` endpoint and shutdown summary.
//! Privacy-first: no addresses are stored, only aggregate counts.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::{ScoringPath, TrustAssessment, TrustStatus};

/// Aggregated statistics since startup
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TelemetryStats {
    /// Addresses successfully scored
    pub total_analyzed: u64,
    /// Requests rejected by validation
    pub total_rejected: u64,
    /// Requests that failed during scoring
    pub total_failed: u64,
    /// Scored by the loaded classifier
    pub model_scored: u64,
    /// Scored by the fallback heuristic
    pub fallback_scored: u64,
    pub safe_count: u64,
    pub warning_count: u64,
    pub high_risk_count: u64,
    /// Average scoring latency (ms)
    pub avg_latency_ms: f64,
    /// Period start timestamp
    pub period_start: u64,
    /// Period end timestamp
    pub period_end: u64,
}

/// Main telemetry collector
pub struct TelemetryCollector {
    total_analyzed: AtomicU64,
    total_rejected: AtomicU64,
    total_failed: AtomicU64,
    model_scored: AtomicU64,
    fallback_scored: AtomicU64,
    safe_count: AtomicU64,
    warning_count: AtomicU64,
    high_risk_count: AtomicU64,
    total_latency_us: AtomicU64,
    session_start: u64,
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self {
            total_analyzed: AtomicU64::new(0),
            total_rejected: AtomicU64::new(0),
            total_failed: AtomicU64::new(0),
            model_scored: AtomicU64::new(0),
            fallback_scored: AtomicU64::new(0),
            safe_count: AtomicU64::new(0),
            warning_count: AtomicU64::new(0),
            high_risk_count: AtomicU64::new(0),
            total_latency_us: AtomicU64::new(0),
            session_start: current_timestamp(),
        }
    }

    /// Record a successful assessment
    pub fn record_assessment(&self, assessment: &TrustAssessment, latency_us: u64) {
        self.total_analyzed.fetch_add(1, Ordering::Relaxed);
        self.total_latency_us.fetch_add(latency_us, Ordering::Relaxed);

        match assessment.path {
            ScoringPath::Model => self.model_scored.fetch_add(1, Ordering::Relaxed),
            ScoringPath::Fallback => self.fallback_scored.fetch_add(1, Ordering::Relaxed),
        };

        match assessment.status {
            TrustStatus::Safe => self.safe_count.fetch_add(1, Ordering::Relaxed),
            TrustStatus::Warning => self.warning_count.fetch_add(1, Ordering::Relaxed),
            TrustStatus::HighRisk => self.high_risk_count.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Record a request rejected by validation
    pub fn record_rejected(&self) {
        self.total_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a scoring failure
    pub fn record_failure(&self) {
        self.total_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of current counters
    pub fn get_stats(&self) -> TelemetryStats {
        let total_analyzed = self.total_analyzed.load(Ordering::Relaxed);
        let total_latency_us = self.total_latency_us.load(Ordering::Relaxed);

        let avg_latency_ms = if total_analyzed > 0 {
            total_latency_us as f64 / total_analyzed as f64 / 1000.0
        } else {
            0.0
        };

        TelemetryStats {
            total_analyzed,
            total_rejected: self.total_rejected.load(Ordering::Relaxed),
            total_failed: self.total_failed.load(Ordering::Relaxed),
            model_scored: self.model_scored.load(Ordering::Relaxed),
            fallback_scored: self.fallback_scored.load(Ordering::Relaxed),
            safe_count: self.safe_count.load(Ordering::Relaxed),
            warning_count: self.warning_count.load(Ordering::Relaxed),
            high_risk_count: self.high_risk_count.load(Ordering::Relaxed),
            avg_latency_ms,
            period_start: self.session_start,
            period_end: current_timestamp(),
        }
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureVector;

    fn assessment(score: u8, path: ScoringPath) -> TrustAssessment {
        TrustAssessment {
            features: FeatureVector {
                owner_tokens: 80,
                liquidity_locked: 0,
                ownership_renounced: 0,
                suspicious_functions: 0,
            },
            score,
            status: TrustStatus::from_score(score),
            path,
        }
    }

    #[test]
    fn test_empty_stats() {
        let collector = TelemetryCollector::new();
        let stats = collector.get_stats();
        assert_eq!(stats.total_analyzed, 0);
        assert_eq!(stats.avg_latency_ms, 0.0);
        assert!(stats.period_end >= stats.period_start);
    }

    #[test]
    fn test_counts_by_path_and_status() {
        let collector = TelemetryCollector::new();
        collector.record_assessment(&assessment(85, ScoringPath::Fallback), 1000);
        collector.record_assessment(&assessment(35, ScoringPath::Fallback), 3000);
        collector.record_assessment(&assessment(55, ScoringPath::Model), 2000);
        collector.record_rejected();
        collector.record_failure();

        let stats = collector.get_stats();
        assert_eq!(stats.total_analyzed, 3);
        assert_eq!(stats.fallback_scored, 2);
        assert_eq!(stats.model_scored, 1);
        assert_eq!(stats.safe_count, 1);
        assert_eq!(stats.warning_count, 1);
        assert_eq!(stats.high_risk_count, 1);
        assert_eq!(stats.total_rejected, 1);
        assert_eq!(stats.total_failed, 1);
        assert!((stats.avg_latency_ms - 2.0).abs() < 1e-9);
    }
}
