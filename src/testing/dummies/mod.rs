mod forest;

pub use forest::{reference_artifact, reference_classes, reference_forest, write_artifact};
