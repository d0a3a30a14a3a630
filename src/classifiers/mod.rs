mod classifier;
mod random_forest;

pub use classifier::{ClassificationError, Classifier};
pub use random_forest::{DecisionTree, ModelError, RandomForest, TreeNode};
