use crate::core::category::CategoryLabel;
use crate::utils::math;
use serde::ser::{Serialize, Serializer};

/// A probability mapping over the classifier's label set, kept in the
/// artifact's class order.
///
/// Values are expected to sum to 1.0 within floating-point tolerance;
/// construction does not renormalize.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityDistribution {
    entries: Vec<(CategoryLabel, f64)>,
}

impl ProbabilityDistribution {
    pub fn new(entries: Vec<(CategoryLabel, f64)>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn probability_of(&self, label: &CategoryLabel) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| *p)
    }

    /// Highest-probability entry; ties break toward the earlier class.
    pub fn argmax(&self) -> Option<(&CategoryLabel, f64)> {
        let values: Vec<f64> = self.entries.iter().map(|(_, p)| *p).collect();
        math::argmax(&values).map(|i| (&self.entries[i].0, self.entries[i].1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryLabel, f64)> {
        self.entries.iter().map(|(l, p)| (l, *p))
    }

    pub fn labels(&self) -> impl Iterator<Item = &CategoryLabel> {
        self.entries.iter().map(|(l, _)| l)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }
}

impl Serialize for ProbabilityDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(l, p)| (l, p)))
    }
}
