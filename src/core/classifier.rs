//! Trust Classifier
//!
//! Random-forest classifier loaded once from a JSON artifact at startup.
//!
//! Artifact layout:
//! - `n_features`: must equal the scanner feature count (4)
//! - `classes`: class labels, column order of every leaf `value`
//! - `positive_class`: index of the "scam" column (default 1)
//! - `trees[].nodes[]`: either a split `{feature, threshold, left, right}`
//!   or a leaf `{value}`; node 0 is the root
//!
//! Prediction is soft voting: each tree's leaf weights are normalized to
//! probabilities and averaged across the forest.

use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::models::{AppError, AppResult, ErrorCode};
use crate::utils::constants::FEATURE_COUNT;

/// Binary classifier over the scanner feature vector
pub trait TrustClassifier: Send + Sync {
    /// Probability (0.0-1.0) that the contract belongs to the scam class
    fn scam_probability(&self, input: &[f64; FEATURE_COUNT]) -> AppResult<f64>;

    /// Short description for logs and health output
    fn describe(&self) -> String;
}

/// Tree node as stored in the artifact
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

/// Single decision tree
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf. Children always have larger indices
    /// than their parent (checked at load), so the walk terminates.
    fn leaf_for(&self, input: &[f64; FEATURE_COUNT]) -> AppResult<&[f64]> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = input.get(*feature).ok_or_else(|| {
                        AppError::inference_failed(format!("split on unknown feature {}", feature))
                    })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { value }) => return Ok(value),
                None => {
                    return Err(AppError::inference_failed(format!(
                        "node {} out of bounds",
                        idx
                    )))
                }
            }
        }
    }

    /// Class probabilities for one tree
    fn predict_proba(&self, input: &[f64; FEATURE_COUNT]) -> AppResult<Vec<f64>> {
        let leaf = self.leaf_for(input)?;
        let total: f64 = leaf.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(AppError::inference_failed(format!(
                "leaf weights sum to {}",
                total
            )));
        }
        Ok(leaf.iter().map(|w| w / total).collect())
    }

    fn validate(&self, tree_idx: usize, class_count: usize) -> AppResult<()> {
        if self.nodes.is_empty() {
            return Err(AppError::invalid_model(format!("tree {} has no nodes", tree_idx)));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(AppError::invalid_model(format!(
                            "tree {} node {} splits on feature {} (only {} features)",
                            tree_idx, i, feature, FEATURE_COUNT
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(AppError::invalid_model(format!(
                            "tree {} node {} has non-finite threshold",
                            tree_idx, i
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(AppError::invalid_model(format!(
                                "tree {} node {} has invalid child {}",
                                tree_idx, i, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != class_count {
                        return Err(AppError::invalid_model(format!(
                            "tree {} leaf {} has {} weights, expected {}",
                            tree_idx,
                            i,
                            value.len(),
                            class_count
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

fn default_positive_class() -> usize {
    1
}

/// Artifact as written on disk, before validation
#[derive(Debug, Deserialize)]
struct RawForest {
    n_features: usize,
    classes: Vec<i64>,
    #[serde(default = "default_positive_class")]
    positive_class: usize,
    trees: Vec<DecisionTree>,
}

/// Random forest trust classifier
///
/// Only constructible through deserialization, which always validates.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawForest")]
pub struct ForestClassifier {
    n_features: usize,
    classes: Vec<i64>,
    positive_class: usize,
    trees: Vec<DecisionTree>,
}

impl TryFrom<RawForest> for ForestClassifier {
    type Error = AppError;

    fn try_from(raw: RawForest) -> AppResult<Self> {
        let forest = Self {
            n_features: raw.n_features,
            classes: raw.classes,
            positive_class: raw.positive_class,
            trees: raw.trees,
        };
        forest.validate()?;
        Ok(forest)
    }
}

impl ForestClassifier {
    /// Parse and validate an artifact from a JSON string
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Read, parse and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::ModelNotFound,
                format!("cannot read {}", path.display()),
                e,
            )
        })?;
        Self::from_json(&raw)
    }

    fn validate(&self) -> AppResult<()> {
        if self.n_features != FEATURE_COUNT {
            return Err(AppError::invalid_model(format!(
                "artifact expects {} features, scanner provides {}",
                self.n_features, FEATURE_COUNT
            )));
        }
        if self.classes.len() < 2 {
            return Err(AppError::invalid_model("need at least two classes"));
        }
        if self.positive_class >= self.classes.len() {
            return Err(AppError::invalid_model(format!(
                "positive_class {} out of range",
                self.positive_class
            )));
        }
        if self.trees.is_empty() {
            return Err(AppError::invalid_model("forest has no trees"));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.classes.len())?;
        }
        Ok(())
    }

    /// Averaged class probabilities across all trees
    pub fn predict_proba(&self, input: &[f64; FEATURE_COUNT]) -> AppResult<Vec<f64>> {
        if input.iter().any(|x| !x.is_finite()) {
            return Err(AppError::inference_failed("non-finite feature value"));
        }

        let mut sums = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (sum, p) in sums.iter_mut().zip(tree.predict_proba(input)?) {
                *sum += p;
            }
        }

        let n = self.trees.len() as f64;
        Ok(sums.into_iter().map(|s| s / n).collect())
    }
}

impl TrustClassifier for ForestClassifier {
    fn scam_probability(&self, input: &[f64; FEATURE_COUNT]) -> AppResult<f64> {
        let proba = self.predict_proba(input)?;
        let p = *proba.get(self.positive_class).ok_or_else(|| {
            AppError::inference_failed(format!(
                "positive_class {} out of range",
                self.positive_class
            ))
        })?;
        debug!(?input, p_scam = p, "🌲 Forest prediction");
        Ok(p)
    }

    fn describe(&self) -> String {
        format!("random_forest(trees={}, classes={})", self.trees.len(), self.classes.len())
    }
}

/// Load the classifier, degrading to `None` on any error
pub fn load_classifier(path: impl AsRef<Path>) -> Option<Arc<dyn TrustClassifier>> {
    let path = path.as_ref();
    match ForestClassifier::load(path) {
        Ok(forest) => {
            info!("✅ Trust model loaded from {}: {}", path.display(), forest.describe());
            Some(Arc::new(forest))
        }
        Err(e) => {
            warn!(
                code = e.code_str(),
                "❌ Failed to load trust model from {}: {}. Falling back to heuristic scoring.",
                path.display(),
                e
            );
            None
        }
    }
}
