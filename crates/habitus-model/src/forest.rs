//! Pre-trained decision-forest classifier.
//!
//! The training pipeline exports the fitted forest as `classifier.json`: each
//! tree is a flat node array where split nodes reference their children by
//! index and leaves carry the predicted class. Prediction walks every tree
//! and takes a majority vote over the leaf classes.

use habitus_core::encode::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;

/// One node in a flattened decision tree.
///
/// Split nodes route `x[feature] <= threshold` to `left`, otherwise `right`
/// (the comparison convention of the exporting trainer).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    /// Walk from the root to a leaf and return its class.
    ///
    /// Safe after [`ForestClassifier::check`]: children only point forward,
    /// so traversal terminates, and every index is in range.
    fn decide(&self, features: &FeatureVector) -> usize {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// Majority-vote ensemble of decision trees fitted at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestClassifier {
    n_classes: usize,
    trees: Vec<Tree>,
}

impl ForestClassifier {
    /// Check the exported structure against the feature schema.
    ///
    /// Child references must point forward so traversal cannot cycle, and
    /// feature/class indices must be in range so prediction never panics.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.n_classes == 0 {
            return Err("classifier has n_classes = 0".to_string());
        }
        if self.trees.is_empty() {
            return Err("classifier has no trees".to_string());
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {t} has no nodes"));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                match node {
                    Node::Leaf { class } => {
                        if *class >= self.n_classes {
                            return Err(format!(
                                "tree {t} node {n}: leaf class {class} >= n_classes {}",
                                self.n_classes
                            ));
                        }
                    }
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= FEATURE_COUNT {
                            return Err(format!(
                                "tree {t} node {n}: feature {feature} >= {FEATURE_COUNT}"
                            ));
                        }
                        if !threshold.is_finite() {
                            return Err(format!("tree {t} node {n}: non-finite threshold"));
                        }
                        for child in [*left, *right] {
                            if child <= n || child >= tree.nodes.len() {
                                return Err(format!(
                                    "tree {t} node {n}: child {child} out of range"
                                ));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of classes the forest votes over.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of trees in the ensemble.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Votes per class across all trees.
    pub fn vote_counts(&self, features: &FeatureVector) -> Vec<usize> {
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.decide(features)] += 1;
        }
        votes
    }

    /// Predict a single class index by majority vote.
    pub fn predict(&self, features: &FeatureVector) -> usize {
        argmax(&self.vote_counts(features))
    }
}

/// Index of the largest vote count; ties break toward the lower class index,
/// matching the argmax convention of the exporting trainer.
pub(crate) fn argmax(votes: &[usize]) -> usize {
    let mut best = 0;
    for (i, &v) in votes.iter().enumerate() {
        if v > votes[best] {
            best = i;
        }
    }
    best
}
