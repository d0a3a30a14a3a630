use crate::classifiers::classifier::ClassificationError;
use crate::core::FeatureRow;
use crate::utils::math;
use serde::{Deserialize, Serialize};

/// One node of a decision tree.
///
/// Trees are stored as an index-linked arena: `left`/`right` are indices
/// into the owning tree's node vector and must point strictly forward
/// (child index greater than parent index), which guarantees descent
/// terminates. A row is routed left when its feature value is `<=` the
/// split threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        counts: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    #[inline]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Routes the row to its leaf and returns the leaf's index and counts.
    fn leaf_for(&self, row: &FeatureRow) -> Result<(usize, &[f64]), ClassificationError> {
        let mut idx = 0;
        loop {
            let node = self
                .nodes
                .get(idx)
                .ok_or(ClassificationError::CorruptTree { node: idx, child: idx })?;
            match node {
                TreeNode::Leaf { counts } => return Ok((idx, counts)),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value =
                        row.get(*feature)
                            .copied()
                            .ok_or(ClassificationError::FeatureIndex {
                                node: idx,
                                feature: *feature,
                            })?;
                    let next = if value <= *threshold { *left } else { *right };
                    if next <= idx || next >= self.nodes.len() {
                        return Err(ClassificationError::CorruptTree {
                            node: idx,
                            child: next,
                        });
                    }
                    idx = next;
                }
            }
        }
    }

    /// Class proportions observed at the leaf this row falls into.
    pub fn class_proportions(
        &self,
        row: &FeatureRow,
        num_classes: usize,
    ) -> Result<Vec<f64>, ClassificationError> {
        if self.nodes.is_empty() {
            return Err(ClassificationError::EmptyModel);
        }
        let (node, counts) = self.leaf_for(row)?;
        if counts.len() != num_classes {
            return Err(ClassificationError::LeafArity {
                node,
                expected: num_classes,
                got: counts.len(),
            });
        }
        let mut proportions = counts.to_vec();
        if !math::normalize_in_place(&mut proportions) {
            return Err(ClassificationError::EmptyLeaf { node });
        }
        Ok(proportions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> DecisionTree {
        DecisionTree::new(vec![
            TreeNode::Split {
                feature: 1,
                threshold: 10.0,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf {
                counts: vec![3.0, 1.0],
            },
            TreeNode::Leaf {
                counts: vec![0.0, 4.0],
            },
        ])
    }

    #[test]
    fn routes_left_on_threshold_equality() {
        let p = stump().class_proportions(&[0.0, 10.0, 0.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(p, vec![0.75, 0.25]);
    }

    #[test]
    fn routes_right_above_threshold() {
        let p = stump().class_proportions(&[0.0, 10.5, 0.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(p, vec![0.0, 1.0]);
    }

    #[test]
    fn single_leaf_tree_votes_unconditionally() {
        let tree = DecisionTree::new(vec![TreeNode::Leaf {
            counts: vec![2.0, 2.0],
        }]);
        let p = tree.class_proportions(&[0.0; 5], 2).unwrap();
        assert_eq!(p, vec![0.5, 0.5]);
    }

    #[test]
    fn backward_child_is_reported_corrupt() {
        let tree = DecisionTree::new(vec![TreeNode::Split {
            feature: 0,
            threshold: 1.0,
            left: 0,
            right: 0,
        }]);
        assert_eq!(
            tree.class_proportions(&[0.0; 5], 2),
            Err(ClassificationError::CorruptTree { node: 0, child: 0 })
        );
    }

    #[test]
    fn leaf_arity_mismatch_is_an_error() {
        let tree = DecisionTree::new(vec![TreeNode::Leaf {
            counts: vec![1.0, 2.0, 3.0],
        }]);
        assert_eq!(
            tree.class_proportions(&[0.0; 5], 2),
            Err(ClassificationError::LeafArity {
                node: 0,
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn unpopulated_leaf_is_an_error() {
        let tree = DecisionTree::new(vec![TreeNode::Leaf {
            counts: vec![0.0, 0.0],
        }]);
        assert_eq!(
            tree.class_proportions(&[0.0; 5], 2),
            Err(ClassificationError::EmptyLeaf { node: 0 })
        );
    }
}
