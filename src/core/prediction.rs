use crate::core::category::CategoryLabel;
use crate::core::distribution::ProbabilityDistribution;
use serde::Serialize;

/// The outcome of one classification request: the predicted category plus
/// the full per-class confidence of the model.
///
/// Invariant: `label` is a member of `probabilities`' key set and is its
/// argmax. The classifier upholds this by construction; the service also
/// asserts it in debug builds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: CategoryLabel,
    pub probabilities: ProbabilityDistribution,
}
