//! PyPI registry checking module.
//!
//! Both manifest readers share one existence check: a [`PackageChecker`]
//! answers "is this name claimed publicly?" and [`packages_not_in_public`]
//! folds those answers into the list of confusion candidates.

pub mod pypi;

#[cfg(test)]
pub(crate) mod test_utils;

pub use pypi::PypiChecker;

use crate::types::RegistryCheck;
use std::future::Future;
use tracing::debug;

/// Looks a single package name up on a registry.
pub trait PackageChecker: Send + Sync {
    /// Check one name. Never fails: transport errors are reported as
    /// [`RegistryCheck::CheckFailed`].
    fn check(&self, package_name: &str) -> impl Future<Output = RegistryCheck> + Send;
}

/// Check every package in order, one lookup at a time, and return the names
/// that are not available publicly.
///
/// Order and duplicates are kept. A lookup that failed outright is reported
/// the same as a missing package.
pub async fn packages_not_in_public<C: PackageChecker>(
    checker: &C,
    packages: &[String],
) -> Vec<String> {
    let mut not_available = Vec::new();

    for package in packages {
        let result = checker.check(package).await;
        if result.is_available() {
            continue;
        }

        match result {
            RegistryCheck::Unavailable { status } => {
                debug!("Package NOT FOUND ({}): {}", status, package);
            }
            RegistryCheck::CheckFailed { ref error } => {
                debug!("Check failed for {}, treating as unavailable: {}", package, error);
            }
            RegistryCheck::Available => {}
        }
        not_available.push(package.clone());
    }

    not_available
}
