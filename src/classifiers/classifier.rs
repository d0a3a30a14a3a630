use crate::core::{CategoryLabel, FeatureRow, ProbabilityDistribution, ReadingError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClassificationError {
    #[error(transparent)]
    InvalidReading(#[from] ReadingError),

    #[error("feature {index} is not a finite number")]
    NonFiniteFeature { index: usize },

    #[error("node {node} tests feature {feature}, which the row does not have")]
    FeatureIndex { node: usize, feature: usize },

    #[error("corrupt tree: node {node} references child {child}")]
    CorruptTree { node: usize, child: usize },

    #[error("node {node}: leaf has {got} class counts, expected {expected}")]
    LeafArity {
        node: usize,
        expected: usize,
        got: usize,
    },

    #[error("node {node}: leaf holds no observations to vote with")]
    EmptyLeaf { node: usize },

    #[error("model has no trees or classes to vote with")]
    EmptyModel,
}

/// A trained classifier over one pollutant feature row.
///
/// Implementations are immutable once constructed and must behave as pure
/// functions of their input: calling [`predict`] or [`predict_proba`] twice
/// with the same row yields bit-identical results. [`predict`] must return
/// the argmax of [`predict_proba`] for the same row.
///
/// [`predict`]: Classifier::predict
/// [`predict_proba`]: Classifier::predict_proba
pub trait Classifier {
    /// The label set in artifact class order.
    fn class_labels(&self) -> &[CategoryLabel];

    /// Predicts the category of a single feature row.
    fn predict(&self, row: &FeatureRow) -> Result<CategoryLabel, ClassificationError>;

    /// Per-class probabilities for a single feature row. Keys are exactly
    /// [`class_labels`], values sum to 1.0 within floating-point tolerance.
    ///
    /// [`class_labels`]: Classifier::class_labels
    fn predict_proba(
        &self,
        row: &FeatureRow,
    ) -> Result<ProbabilityDistribution, ClassificationError>;
}
