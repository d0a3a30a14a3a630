use serde::{Deserialize, Serialize};
use std::fmt;

/// A category tag owned by the model artifact.
///
/// The label set is whatever the artifact was trained with ("Good",
/// "Moderate" and "Unhealthy" in the shipped model); the core never
/// hardcodes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
