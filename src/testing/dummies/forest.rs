use crate::classifiers::{DecisionTree, RandomForest, TreeNode};
use crate::core::{CategoryLabel, Pollutant};
use crate::model::{FORMAT_VERSION, ModelArtifact};
use std::io;
use std::path::Path;
use strum::IntoEnumIterator;

pub fn reference_classes() -> Vec<CategoryLabel> {
    vec!["Good".into(), "Moderate".into(), "Unhealthy".into()]
}

/// A small, hand-built forest with known vote arithmetic.
///
/// Tree A splits on PM10 then O3, tree B on NO2. For the default reading
/// (20, 15, 10, 30, 5) tree A lands in the [8, 2, 0] leaf and tree B in
/// [7, 3, 0], so the averaged distribution is exactly
/// [0.75, 0.25, 0.0], the golden values the service tests assert.
pub fn reference_forest() -> RandomForest {
    let features = Pollutant::iter()
        .map(|p| p.column_name().to_string())
        .collect();

    let tree_a = DecisionTree::new(vec![
        TreeNode::Split {
            feature: 0, // PM10
            threshold: 50.0,
            left: 1,
            right: 2,
        },
        TreeNode::Leaf {
            counts: vec![8.0, 2.0, 0.0],
        },
        TreeNode::Split {
            feature: 3, // O3
            threshold: 100.0,
            left: 3,
            right: 4,
        },
        TreeNode::Leaf {
            counts: vec![1.0, 6.0, 3.0],
        },
        TreeNode::Leaf {
            counts: vec![0.0, 2.0, 8.0],
        },
    ]);

    let tree_b = DecisionTree::new(vec![
        TreeNode::Split {
            feature: 4, // NO2
            threshold: 40.0,
            left: 1,
            right: 2,
        },
        TreeNode::Leaf {
            counts: vec![7.0, 3.0, 0.0],
        },
        TreeNode::Leaf {
            counts: vec![0.0, 4.0, 6.0],
        },
    ]);

    RandomForest::new(reference_classes(), features, vec![tree_a, tree_b])
}

pub fn reference_artifact() -> ModelArtifact {
    ModelArtifact {
        format_version: FORMAT_VERSION,
        relation: "air_quality_test".to_string(),
        trained_at: Some("2020-11-30T00:00:00Z".parse().expect("fixed timestamp")),
        model: reference_forest(),
    }
}

/// Writes an artifact the way the training pipeline would.
pub fn write_artifact(artifact: &ModelArtifact, path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(artifact)?;
    std::fs::write(path, json)
}
