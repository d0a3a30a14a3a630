use crate::classifiers::RandomForest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artifact format this build reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// The serialized-model envelope stored on disk.
///
/// The payload is the forest itself; the envelope adds the format version,
/// the relation the model was trained on and, when the training pipeline
/// recorded it, the training timestamp shown in the dashboard banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub relation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
    pub model: RandomForest,
}
