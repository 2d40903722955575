//! Reader for `Pipfile` manifests.

use crate::manifest::PackageResolver;
use crate::registry::{packages_not_in_public, PackageChecker, PypiChecker};
use crate::types::{RegistryConfig, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The parts of a Pipfile we read. Only the table keys matter; values
/// (version specs, git refs, extras) are ignored.
#[derive(Debug, Deserialize)]
struct Pipfile {
    packages: Option<toml::Table>,
    #[serde(rename = "dev-packages")]
    dev_packages: Option<toml::Table>,
}

/// Collects package names from a Pipfile's `[packages]` and `[dev-packages]`.
pub struct PipfileResolver<C = PypiChecker> {
    packages: Vec<String>,
    checker: C,
}

impl PipfileResolver<PypiChecker> {
    /// Create a resolver backed by pypi.org.
    pub fn new(verbose: bool) -> Result<Self> {
        Ok(Self::with_checker(PypiChecker::new(
            &RegistryConfig::with_verbose(verbose),
        )?))
    }
}

impl<C: PackageChecker> PipfileResolver<C> {
    /// Create a resolver that checks names with `checker`.
    pub fn with_checker(checker: C) -> Self {
        Self {
            packages: Vec::new(),
            checker,
        }
    }

    /// Append the package names declared in Pipfile `content`, runtime
    /// packages first, each table in document order.
    pub fn read_packages(&mut self, content: &str) -> Result<()> {
        let pipfile: Pipfile = toml::from_str(content)?;

        for table in [pipfile.packages, pipfile.dev_packages].into_iter().flatten() {
            self.packages.extend(table.into_iter().map(|(name, _)| name));
        }

        Ok(())
    }
}

impl<C: PackageChecker> PackageResolver for PipfileResolver<C> {
    fn read_packages_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let before = self.packages.len();
        self.read_packages(&content)?;
        debug!(
            "Read {} packages from {}",
            self.packages.len() - before,
            path.display()
        );
        Ok(())
    }

    fn packages(&self) -> &[String] {
        &self.packages
    }

    async fn packages_not_in_public(&self) -> Vec<String> {
        packages_not_in_public(&self.checker, &self.packages).await
    }
}
