use crate::classifiers::ModelError;
use crate::core::Pollutant;
use crate::model::artifact::{FORMAT_VERSION, ModelArtifact};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use strum::IntoEnumIterator;
use thiserror::Error;

/// Where the dashboard looks for the model when no path is given.
pub const DEFAULT_MODEL_PATH: &str = "air_quality_model.json";

/// Why a model artifact could not be turned into a usable model.
///
/// Every variant is fatal to the session: without a model no predictions
/// are possible, and none of these conditions resolves without operator
/// intervention, so callers must surface the message and halt rather than
/// retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model artifact not found at '{path}'; place the trained model there or pass its path as the first argument")]
    NotFound { path: PathBuf },

    #[error("failed to read model artifact '{path}'")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("model artifact '{path}' is not a valid model file")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact '{path}' uses format version {found}, this build reads version {FORMAT_VERSION}")]
    UnsupportedVersion { path: PathBuf, found: u32 },

    #[error("model artifact '{path}' is incompatible with this build")]
    Incompatible {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

/// Reads, deserializes and validates the artifact at `path`.
pub fn load(path: &Path) -> Result<ModelArtifact, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let artifact: ModelArtifact = serde_json::from_str(&raw).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    if artifact.format_version != FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: artifact.format_version,
        });
    }

    let incompatible = |source| LoadError::Incompatible {
        path: path.to_path_buf(),
        source,
    };
    artifact.model.validate().map_err(&incompatible)?;

    let expected: Vec<&str> = Pollutant::iter().map(Pollutant::column_name).collect();
    artifact
        .model
        .validate_feature_columns(&expected)
        .map_err(&incompatible)?;

    log::debug!(
        "loaded model '{}' ({} trees, {} classes) from '{}'",
        artifact.relation,
        artifact.model.num_trees(),
        artifact.model.classes().len(),
        path.display()
    );
    Ok(artifact)
}

static CACHE: OnceLock<Arc<ModelArtifact>> = OnceLock::new();

/// Loads the artifact at most once per process and hands out a shared handle.
///
/// The first successful load wins; later calls return the cached model
/// without touching storage. Failed loads are not cached: they are fatal
/// to the session, so the caller never comes back for a second attempt.
pub fn load_cached(path: &Path) -> Result<Arc<ModelArtifact>, LoadError> {
    if let Some(model) = CACHE.get() {
        return Ok(Arc::clone(model));
    }
    let artifact = Arc::new(load(path)?);
    Ok(Arc::clone(CACHE.get_or_init(|| artifact)))
}
