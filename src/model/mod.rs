mod artifact;
pub mod loader;

pub use artifact::{FORMAT_VERSION, ModelArtifact};
pub use loader::{DEFAULT_MODEL_PATH, LoadError};
