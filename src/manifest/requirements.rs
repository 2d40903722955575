//! Reader for `requirements.txt`-style manifests.

use crate::manifest::PackageResolver;
use crate::registry::{packages_not_in_public, PackageChecker, PypiChecker};
use crate::types::{RegistryConfig, Result};
use std::path::Path;
use tracing::{debug, trace};

/// Characters that end the package name in a requirement specifier.
const NAME_DELIMITERS: &[char] = &['=', '<', '>', '!', ' ', '~', '#', '['];

/// Collects package names from a requirements file.
pub struct RequirementsResolver<C = PypiChecker> {
    packages: Vec<String>,
    checker: C,
}

impl RequirementsResolver<PypiChecker> {
    /// Create a resolver backed by pypi.org.
    pub fn new(verbose: bool) -> Result<Self> {
        Ok(Self::with_checker(PypiChecker::new(
            &RegistryConfig::with_verbose(verbose),
        )?))
    }
}

impl<C: PackageChecker> RequirementsResolver<C> {
    /// Create a resolver that checks names with `checker`.
    pub fn with_checker(checker: C) -> Self {
        Self {
            packages: Vec::new(),
            checker,
        }
    }

    /// Append the names found in requirements `content`.
    ///
    /// Full-line comments and blank lines are skipped. A trailing `\` joins
    /// the line with the next one; a continuation still pending at end of
    /// input is dropped.
    pub fn read_packages(&mut self, content: &str) {
        let mut line = String::new();

        for raw in content.lines() {
            let l = raw.trim();
            if l.starts_with('#') || l.is_empty() {
                continue;
            }

            if let Some(head) = l.strip_suffix('\\') {
                line.push_str(head);
                continue;
            }
            line.push_str(l);

            match extract_name(&line) {
                Some(name) => {
                    trace!("Requirement '{}' -> {}", line, name);
                    self.packages.push(name.to_string());
                }
                None => trace!("No package name in '{}'", line),
            }
            line.clear();
        }

        if !line.is_empty() {
            debug!("Dropping unterminated continuation: '{}'", line);
        }
    }
}

/// Package name of a single logical requirement line: the first non-empty
/// field between delimiters.
fn extract_name(line: &str) -> Option<&str> {
    line.split(NAME_DELIMITERS)
        .find(|field| !field.is_empty())
        .map(str::trim)
}

impl<C: PackageChecker> PackageResolver for RequirementsResolver<C> {
    fn read_packages_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let before = self.packages.len();
        self.read_packages(&content);
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
