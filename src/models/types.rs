//! Type definitions for Trust Scanner
//! Core data structures shared by feature derivation, scoring and the API

use serde::{Deserialize, Serialize};

use crate::utils::constants::{SAFE_THRESHOLD, WARNING_THRESHOLD};

/// Features derived for a contract address
///
/// Field order is the classifier input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Ownership concentration proxy (80 or 10)
    pub owner_tokens: u32,
    /// Liquidity lock flag (0 or 1)
    pub liquidity_locked: u32,
    /// Ownership renounced flag (0 or 1)
    pub ownership_renounced: u32,
    /// Suspicious function flag (0 or 1)
    pub suspicious_functions: u32,
}

impl FeatureVector {
    /// Numeric classifier input, in fixed field order
    pub fn as_input(&self) -> [f64; 4] {
        [
            self.owner_tokens as f64,
            self.liquidity_locked as f64,
            self.ownership_renounced as f64,
            self.suspicious_functions as f64,
        ]
    }
}

/// Coarse trust label derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustStatus {
    Safe,
    Warning,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl TrustStatus {
    /// Thresholds are evaluated top-down: >70 safe, >40 warning
    pub fn from_score(score: u8) -> Self {
        if score > SAFE_THRESHOLD {
            Self::Safe
        } else if score > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::HighRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::HighRisk => "High Risk",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Safe => "✅",
            Self::Warning => "⚠️",
            Self::HighRisk => "❌",
        }
    }
}

impl std::fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPath {
    /// Loaded classifier artifact
    Model,
    /// Hardcoded heuristic, no classifier available
    Fallback,
}

impl ScoringPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of scoring one address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustAssessment {
    pub features: FeatureVector,
    /// Trust score (0-100), higher is more trustworthy
    pub score: u8,
    pub status: TrustStatus,
    pub path: ScoringPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(TrustStatus::from_score(100), TrustStatus::Safe);
        assert_eq!(TrustStatus::from_score(71), TrustStatus::Safe);
        assert_eq!(TrustStatus::from_score(70), TrustStatus::Warning);
        assert_eq!(TrustStatus::from_score(41), TrustStatus::Warning);
        assert_eq!(TrustStatus::from_score(40), TrustStatus::HighRisk);
        assert_eq!(TrustStatus::from_score(0), TrustStatus::HighRisk);
    }

    #[test]
    fn test_status_serializes_as_label() {
        assert_eq!(serde_json::to_string(&TrustStatus::Safe).unwrap(), "\"Safe\"");
        assert_eq!(serde_json::to_string(&TrustStatus::Warning).unwrap(), "\"Warning\"");
        assert_eq!(serde_json::to_string(&TrustStatus::HighRisk).unwrap(), "\"High Risk\"");
    }

    #[test]
    fn test_feature_input_order() {
        let features = FeatureVector {
            owner_tokens: 80,
            liquidity_locked: 1,
            ownership_renounced: 0,
            suspicious_functions: 1,
        };
        assert_eq!(features.as_input(), [80.0, 1.0, 0.0, 1.0]);
    }
}
