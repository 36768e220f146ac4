//! Trust Scanner Library
//!
//! Off-chain trust scoring for smart contract addresses:
//! - Derives a feature vector from the address
//! - Scores it with a random-forest classifier loaded at startup
//! - Falls back to a fixed heuristic when no classifier is available
//! - Maps the score to a `Safe` / `Warning` / `High Risk` label

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    derive_features, fallback_score, ContractInterface, ForestClassifier, TrustClassifier,
    TrustScorer,
};
pub use models::{
    AppError, AppResult, ErrorCode, FeatureVector, ScannerConfig, ScoringPath, TrustAssessment,
    TrustStatus,
};
pub use utils::telemetry::{TelemetryCollector, TelemetryStats};
