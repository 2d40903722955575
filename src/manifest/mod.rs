//! Python manifest readers.
//!
//! This module handles extracting package names from:
//! - `requirements.txt`-style files (one specifier per line)
//! - `Pipfile`s (`[packages]` and `[dev-packages]` tables)

pub mod pipfile;
pub mod requirements;

pub use pipfile::PipfileResolver;
pub use requirements::RequirementsResolver;

use crate::types::{ConfusionError, Result};
use std::future::Future;
use std::path::Path;
use std::str::FromStr;

/// A manifest reader that collects package names and checks them against the
/// public registry.
pub trait PackageResolver {
    /// Read package names from `path`, appending them to the collected list.
    fn read_packages_from_file(&mut self, path: &Path) -> Result<()>;

    /// Collected names, in the order they were read.
    fn packages(&self) -> &[String];

    /// Names from the collected list that are not available publicly.
    fn packages_not_in_public(&self) -> impl Future<Output = Vec<String>> + Send;
}

/// Supported manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `requirements.txt`-style file.
    Pip,
    /// `Pipfile`.
    Pipenv,
}

impl ManifestKind {
    /// Guess the manifest kind from a file name. Only `Pipfile` is
    /// recognised as pipenv; anything else is read as a requirements file.
    pub fn detect(path: &Path) -> Self {
        match path.file_name().and_then(|name| name.to_str()) {
            Some("Pipfile") => ManifestKind::Pipenv,
            _ => ManifestKind::Pip,
        }
    }
}

impl FromStr for ManifestKind {
    type Err = ConfusionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pip" => Ok(ManifestKind::Pip),
            "pipenv" => Ok(ManifestKind::Pipenv),
            other => Err(ConfusionError::Config(format!(
                "unknown manifest kind '{}' (expected pip or pipenv)",
                other
            ))),
        }
    }
}
