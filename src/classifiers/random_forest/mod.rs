mod forest;
mod tree;

pub use forest::{ModelError, RandomForest};
pub use tree::{DecisionTree, TreeNode};
