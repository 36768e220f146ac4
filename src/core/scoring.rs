//! Trust Scoring Module
//!
//! Turns a feature vector into a 0-100 trust score and a status label.
//! Higher scores mean more trustworthy.
//!
//! - Model path: `round((1 - p_scam) * 100)`
//! - Fallback path (no classifier): `65 + owner_tokens / 4` when the owner
//!   share is above 50, flat 35 otherwise

use std::sync::Arc;
use tracing::debug;

use super::classifier::TrustClassifier;
use super::features::derive_features;
use crate::models::{AppResult, FeatureVector, ScoringPath, TrustAssessment, TrustStatus};
use crate::utils::constants::{
    FALLBACK_BASE_SCORE, FALLBACK_LOW_SCORE, FALLBACK_OWNER_THRESHOLD, MAX_SCORE,
};

/// Heuristic score used when no classifier is loaded.
///
/// The two branches are disjoint (35 vs 65+); that gap is intentional.
pub fn fallback_score(features: &FeatureVector) -> u8 {
    if features.owner_tokens > FALLBACK_OWNER_THRESHOLD {
        let bonus = (features.owner_tokens / 4).min(u32::from(MAX_SCORE - FALLBACK_BASE_SCORE));
        FALLBACK_BASE_SCORE + bonus as u8
    } else {
        FALLBACK_LOW_SCORE
    }
}

/// Trust score from a scam probability
pub fn score_from_probability(p_scam: f64) -> u8 {
    let p = p_scam.clamp(0.0, 1.0);
    ((1.0 - p) * 100.0).round() as u8
}

/// Scores addresses with an optional classifier
#[derive(Clone)]
pub struct TrustScorer {
    classifier: Option<Arc<dyn TrustClassifier>>,
}

impl TrustScorer {
    pub fn new(classifier: Option<Arc<dyn TrustClassifier>>) -> Self {
        Self { classifier }
    }

    /// Scorer that always uses the heuristic
    pub fn fallback_only() -> Self {
        Self { classifier: None }
    }

    pub fn has_model(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn model_description(&self) -> Option<String> {
        self.classifier.as_ref().map(|c| c.describe())
    }

    /// Score an already-derived feature vector
    pub fn score_features(&self, features: FeatureVector) -> AppResult<TrustAssessment> {
        let (score, path) = match &self.classifier {
            Some(classifier) => {
                let p_scam = classifier.scam_probability(&features.as_input())?;
                (score_from_probability(p_scam), ScoringPath::Model)
            }
            None => {
                debug!("🧮 No classifier loaded, using fallback scoring");
                (fallback_score(&features), ScoringPath::Fallback)
            }
        };

        Ok(TrustAssessment {
            features,
            score,
            status: TrustStatus::from_score(score),
            path,
        })
    }

    /// Derive features for an address and score them
    pub fn assess(&self, address: &str) -> AppResult<TrustAssessment> {
        self.score_features(derive_features(address))
    }
}

impl std::fmt::Debug for TrustScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustScorer")
            .field("model", &self.model_description())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppError, ErrorCode};
    use crate::utils::constants::FEATURE_COUNT;

    struct FixedClassifier(f64);

    impl TrustClassifier for FixedClassifier {
        fn scam_probability(&self, _input: &[f64; FEATURE_COUNT]) -> AppResult<f64> {
            Ok(self.0)
        }

        fn describe(&self) -> String {
            format!("fixed({})", self.0)
        }
    }

    struct BrokenClassifier;

    impl TrustClassifier for BrokenClassifier {
        fn scam_probability(&self, _input: &[f64; FEATURE_COUNT]) -> AppResult<f64> {
            Err(AppError::inference_failed("boom"))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn features(owner_tokens: u32) -> FeatureVector {
        FeatureVector {
            owner_tokens,
            liquidity_locked: 0,
            ownership_renounced: 0,
            suspicious_functions: 0,
        }
    }

    #[test]
    fn test_fallback_score_branches() {
        assert_eq!(fallback_score(&features(80)), 85);
        assert_eq!(fallback_score(&features(10)), 35);
        // Boundary: 50 is not above the threshold
        assert_eq!(fallback_score(&features(50)), 35);
        assert_eq!(fallback_score(&features(51)), 77);
    }

    #[test]
    fn test_fallback_score_capped() {
        assert_eq!(fallback_score(&features(400)), 100);
    }

    #[test]
    fn test_score_from_probability() {
        assert_eq!(score_from_probability(0.0), 100);
        assert_eq!(score_from_probability(1.0), 0);
        assert_eq!(score_from_probability(0.25), 75);
        assert_eq!(score_from_probability(1.0 / 3.0), 67);
        assert_eq!(score_from_probability(2.0 / 3.0), 33);
        // Out of range probabilities clamp
        assert_eq!(score_from_probability(-0.5), 100);
        assert_eq!(score_from_probability(1.5), 0);
    }

    #[test]
    fn test_exact_halves_round_up() {
        // 62.5 and 87.5 are exact in f64; halves go away from zero, not to even
        assert_eq!(score_from_probability(0.375), 63);
        assert_eq!(score_from_probability(0.125), 88);
    }

    #[test]
    fn test_fallback_scenarios() {
        let scorer = TrustScorer::fallback_only();
        assert!(!scorer.has_model());

        let a = scorer.assess("0x1234a").unwrap();
        assert_eq!((a.score, a.status, a.path), (85, TrustStatus::Safe, ScoringPath::Fallback));

        let one = scorer.assess("0x1234561").unwrap();
        assert_eq!((one.score, one.status), (35, TrustStatus::HighRisk));

        let zero = scorer.assess("0x0").unwrap();
        assert_eq!(zero.features.liquidity_locked, 1);
        assert_eq!(zero.features.ownership_renounced, 1);
        assert_eq!((zero.score, zero.status), (85, TrustStatus::Safe));
    }

    #[test]
    fn test_fallback_never_warning() {
        let scorer = TrustScorer::fallback_only();
        for digit in "0123456789abcdef".chars() {
            let result = scorer.assess(&format!("0x{}", digit)).unwrap();
            assert_ne!(result.status, TrustStatus::Warning, "digit {}", digit);
        }
    }

    #[test]
    fn test_model_path() {
        let scorer = TrustScorer::new(Some(Arc::new(FixedClassifier(0.45))));
        assert!(scorer.has_model());
        let result = scorer.assess("0xabc").unwrap();
        assert_eq!(result.score, 55);
        assert_eq!(result.status, TrustStatus::Warning);
        assert_eq!(result.path, ScoringPath::Model);
    }

    #[test]
    fn test_model_error_propagates() {
        let scorer = TrustScorer::new(Some(Arc::new(BrokenClassifier)));
        let err = scorer.assess("0xabc").unwrap_err();
        assert_eq!(err.code, ErrorCode::ModelInferenceFailed);
    }

    #[test]
    fn test_idempotent() {
        let scorer = TrustScorer::fallback_only();
        let first = scorer.assess("0xfeed").unwrap();
        for _ in 0..5 {
            assert_eq!(scorer.assess("0xfeed").unwrap(), first);
        }
    }
}
