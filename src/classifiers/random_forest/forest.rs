use crate::classifiers::classifier::{ClassificationError, Classifier};
use crate::classifiers::random_forest::tree::{DecisionTree, TreeNode};
use crate::core::{CategoryLabel, FeatureRow, ProbabilityDistribution};
use crate::utils::math;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural problems found when validating a deserialized forest.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("model defines {0} classes; at least two are required")]
    TooFewClasses(usize),

    #[error("model contains no trees")]
    NoTrees,

    #[error("tree {tree} is empty")]
    EmptyTree { tree: usize },

    #[error("tree {tree}, node {node}: feature index {feature} out of range for {features} feature columns")]
    FeatureOutOfRange {
        tree: usize,
        node: usize,
        feature: usize,
        features: usize,
    },

    #[error("tree {tree}, node {node}: child {child} does not point forward within {len} nodes")]
    BadChildIndex {
        tree: usize,
        node: usize,
        child: usize,
        len: usize,
    },

    #[error("tree {tree}, node {node}: leaf has {got} class counts, expected {expected}")]
    LeafArity {
        tree: usize,
        node: usize,
        expected: usize,
        got: usize,
    },

    #[error("tree {tree}, node {node}: leaf counts must be non-negative with a positive sum")]
    BadLeafCounts { tree: usize, node: usize },

    #[error("feature columns {got:?} do not match the expected {expected:?}")]
    FeatureColumns {
        got: Vec<String>,
        expected: Vec<String>,
    },
}

/// An ensemble of decision trees voting by averaged leaf proportions,
/// matching the semantics of the forest the artifact was trained as.
///
/// `predict_proba` is the mean of the per-tree class proportions;
/// `predict` is its argmax, so argmax consistency holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    classes: Vec<CategoryLabel>,
    features: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(
        classes: Vec<CategoryLabel>,
        features: Vec<String>,
        trees: Vec<DecisionTree>,
    ) -> Self {
        Self {
            classes,
            features,
            trees,
        }
    }

    #[inline]
    pub fn classes(&self) -> &[CategoryLabel] {
        &self.classes
    }

    #[inline]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[inline]
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Validates the forest structure after deserialization.
    ///
    /// Checks class and tree cardinality, feature indices against the
    /// declared feature columns, forward-pointing child indices (the
    /// termination guarantee descent relies on) and leaf count vectors.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.classes.len() < 2 {
            return Err(ModelError::TooFewClasses(self.classes.len()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::NoTrees);
        }
        for (t, tree) in self.trees.iter().enumerate() {
            let nodes = tree.nodes();
            if nodes.is_empty() {
                return Err(ModelError::EmptyTree { tree: t });
            }
            for (n, node) in nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= self.features.len() {
                            return Err(ModelError::FeatureOutOfRange {
                                tree: t,
                                node: n,
                                feature: *feature,
                                features: self.features.len(),
                            });
                        }
                        for child in [*left, *right] {
                            if child <= n || child >= nodes.len() {
                                return Err(ModelError::BadChildIndex {
                                    tree: t,
                                    node: n,
                                    child,
                                    len: nodes.len(),
                                });
                            }
                        }
                    }
                    TreeNode::Leaf { counts } => {
                        if counts.len() != self.classes.len() {
                            return Err(ModelError::LeafArity {
                                tree: t,
                                node: n,
                                expected: self.classes.len(),
                                got: counts.len(),
                            });
                        }
                        let sum: f64 = counts.iter().sum();
                        if counts.iter().any(|c| !c.is_finite() || *c < 0.0) || sum <= 0.0 {
                            return Err(ModelError::BadLeafCounts { tree: t, node: n });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Verifies the declared feature columns against the expected layout.
    pub fn validate_feature_columns(&self, expected: &[&str]) -> Result<(), ModelError> {
        if self.features.len() != expected.len()
            || self.features.iter().zip(expected).any(|(got, want)| got != want)
        {
            return Err(ModelError::FeatureColumns {
                got: self.features.clone(),
                expected: expected.iter().map(|s| s.to_string()).collect(),
            });
        }
        Ok(())
    }

    fn averaged_proportions(&self, row: &FeatureRow) -> Result<Vec<f64>, ClassificationError> {
        if self.trees.is_empty() || self.classes.is_empty() {
            return Err(ClassificationError::EmptyModel);
        }
        for (index, value) in row.iter().enumerate() {
            if !value.is_finite() {
                return Err(ClassificationError::NonFiniteFeature { index });
            }
        }
        let mut sum = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let proportions = tree.class_proportions(row, self.classes.len())?;
            math::add_in_place(&mut sum, &proportions);
        }
        let n = self.trees.len() as f64;
        for v in sum.iter_mut() {
            *v /= n;
        }
        Ok(sum)
    }
}

impl Classifier for RandomForest {
    fn class_labels(&self) -> &[CategoryLabel] {
        &self.classes
    }

    fn predict(&self, row: &FeatureRow) -> Result<CategoryLabel, ClassificationError> {
        let proportions = self.averaged_proportions(row)?;
        let best = math::argmax(&proportions).ok_or(ClassificationError::EmptyModel)?;
        Ok(self.classes[best].clone())
    }

    fn predict_proba(
        &self,
        row: &FeatureRow,
    ) -> Result<ProbabilityDistribution, ClassificationError> {
        let proportions = self.averaged_proportions(row)?;
        Ok(ProbabilityDistribution::new(
            self.classes.iter().cloned().zip(proportions).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{reference_classes, reference_forest};

    fn feature_names() -> Vec<String> {
        use strum::IntoEnumIterator;
        crate::core::Pollutant::iter()
            .map(|p| p.column_name().to_string())
            .collect()
    }

    #[test]
    fn reference_forest_is_structurally_valid() {
        assert_eq!(reference_forest().validate(), Ok(()));
    }

    #[test]
    fn averages_per_tree_leaf_proportions() {
        let forest = reference_forest();
        // Low-pollution row: tree A votes [0.8, 0.2, 0.0], tree B [0.7, 0.3, 0.0].
        let dist = forest.predict_proba(&[20.0, 15.0, 10.0, 30.0, 5.0]).unwrap();
        let probs: Vec<f64> = dist.iter().map(|(_, p)| p).collect();
        assert!((probs[0] - 0.75).abs() < 1e-12);
        assert!((probs[1] - 0.25).abs() < 1e-12);
        assert_eq!(probs[2], 0.0);
    }

    #[test]
    fn predict_is_the_argmax_of_predict_proba() {
        let forest = reference_forest();
        for row in [
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [20.0, 15.0, 10.0, 30.0, 5.0],
            [80.0, 10.0, 10.0, 120.0, 10.0],
            [150.0, 150.0, 150.0, 150.0, 150.0],
        ] {
            let label = forest.predict(&row).unwrap();
            let dist = forest.predict_proba(&row).unwrap();
            assert_eq!(&label, dist.argmax().unwrap().0);
        }
    }

    #[test]
    fn distribution_keys_are_exactly_the_label_set() {
        let forest = reference_forest();
        let dist = forest.predict_proba(&[20.0, 15.0, 10.0, 30.0, 5.0]).unwrap();
        let keys: Vec<&CategoryLabel> = dist.labels().collect();
        let labels: Vec<&CategoryLabel> = forest.class_labels().iter().collect();
        assert_eq!(keys, labels);
    }

    #[test]
    fn equal_votes_break_toward_the_earlier_class() {
        let forest = RandomForest::new(
            reference_classes(),
            feature_names(),
            vec![DecisionTree::new(vec![TreeNode::Leaf {
                counts: vec![5.0, 5.0, 0.0],
            }])],
        );
        assert_eq!(forest.predict(&[0.0; 5]).unwrap().as_str(), "Good");
    }

    #[test]
    fn rejects_non_finite_rows() {
        let forest = reference_forest();
        assert_eq!(
            forest.predict(&[f64::NAN, 0.0, 0.0, 0.0, 0.0]),
            Err(ClassificationError::NonFiniteFeature { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_degenerate_models() {
        let no_trees = RandomForest::new(reference_classes(), feature_names(), vec![]);
        assert_eq!(no_trees.validate(), Err(ModelError::NoTrees));

        let one_class = RandomForest::new(
            vec!["Good".into()],
            feature_names(),
            reference_forest().trees.clone(),
        );
        assert_eq!(one_class.validate(), Err(ModelError::TooFewClasses(1)));
    }

    #[test]
    fn validate_rejects_backward_children() {
        let forest = RandomForest::new(
            reference_classes(),
            feature_names(),
            vec![DecisionTree::new(vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 1,
                    right: 0,
                },
                TreeNode::Leaf {
                    counts: vec![1.0, 1.0, 1.0],
                },
            ])],
        );
        assert_eq!(
            forest.validate(),
            Err(ModelError::BadChildIndex {
                tree: 0,
                node: 0,
                child: 0,
                len: 2
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_features() {
        let forest = RandomForest::new(
            reference_classes(),
            feature_names(),
            vec![DecisionTree::new(vec![
                TreeNode::Split {
                    feature: 9,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    counts: vec![1.0, 1.0, 1.0],
                },
                TreeNode::Leaf {
                    counts: vec![1.0, 1.0, 1.0],
                },
            ])],
        );
        assert_eq!(
            forest.validate(),
            Err(ModelError::FeatureOutOfRange {
                tree: 0,
                node: 0,
                feature: 9,
                features: 5
            })
        );
    }

    #[test]
    fn validate_rejects_bad_leaf_counts() {
        let forest = RandomForest::new(
            reference_classes(),
            feature_names(),
            vec![DecisionTree::new(vec![TreeNode::Leaf {
                counts: vec![0.0, -1.0, 1.0],
            }])],
        );
        assert_eq!(
            forest.validate(),
            Err(ModelError::BadLeafCounts { tree: 0, node: 0 })
        );
    }

    #[test]
    fn feature_column_mismatch_is_reported() {
        let forest = RandomForest::new(
            reference_classes(),
            vec!["PM10".into(), "PM25".into()],
            vec![DecisionTree::new(vec![TreeNode::Leaf {
                counts: vec![1.0, 1.0, 1.0],
            }])],
        );
        let err = forest
            .validate_feature_columns(&["PM10", "SO2", "CO", "O3", "NO2"])
            .unwrap_err();
        assert!(matches!(err, ModelError::FeatureColumns { .. }));
    }
}
