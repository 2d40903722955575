//! Scan a single manifest end to end.

use crate::manifest::{ManifestKind, PackageResolver, PipfileResolver, RequirementsResolver};
use crate::registry::{PackageChecker, PypiChecker};
use crate::types::{RegistryConfig, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Result of scanning one manifest.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Manifest that was scanned.
    pub path: PathBuf,
    pub kind: ManifestKind,
    /// Number of names read (duplicates included).
    pub packages_found: usize,
    /// Names not available on the public registry, in manifest order.
    pub not_in_public: Vec<String>,
    pub duration_secs: f64,
}

/// Read `path` as a `kind` manifest and check its packages against the
/// registry described by `registry`.
pub async fn scan_manifest(
    path: &Path,
    kind: ManifestKind,
    registry: &RegistryConfig,
) -> Result<ScanResult> {
    let checker = PypiChecker::new(registry)?;
    scan_with_checker(path, kind, checker).await
}

/// Like [`scan_manifest`], with a caller-supplied checker.
pub async fn scan_with_checker<C: PackageChecker>(
    path: &Path,
    kind: ManifestKind,
    checker: C,
) -> Result<ScanResult> {
    let start_time = Instant::now();
    debug!("Scanning {} as {:?}", path.display(), kind);

    let (packages_found, not_in_public) = match kind {
        ManifestKind::Pip => run(RequirementsResolver::with_checker(checker), path).await?,
        ManifestKind::Pipenv => run(PipfileResolver::with_checker(checker), path).await?,
    };

    Ok(ScanResult {
        path: path.to_path_buf(),
        kind,
        packages_found,
        not_in_public,
        duration_secs: start_time.elapsed().as_secs_f64(),
    })
}

async fn run<R: PackageResolver>(mut resolver: R, path: &Path) -> Result<(usize, Vec<String>)> {
    resolver.read_packages_from_file(path)?;
    let not_in_public = resolver.packages_not_in_public().await;
    Ok((resolver.packages().len(), not_in_public))
}
