//! pyconfused - Dependency confusion scanner for Python manifests.
//!
//! This library checks the packages declared in a project's manifests against
//! PyPI and reports the names nobody has claimed publicly:
//! - `requirements.txt`-style files ([`RequirementsResolver`])
//! - `Pipfile`s ([`PipfileResolver`])
//!
//! # Example
//!
//! ```no_run
//! use pyconfused::{PackageResolver, RequirementsResolver};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut resolver = RequirementsResolver::new(false).unwrap();
//!     resolver
//!         .read_packages_from_file(Path::new("requirements.txt"))
//!         .unwrap();
//!     for name in resolver.packages_not_in_public().await {
//!         println!("{} is not on PyPI", name);
//!     }
//! }
//! ```

pub mod config;
pub mod manifest;
pub mod registry;
pub mod scanner;
pub mod types;

pub use config::{Commands, Config, ScanConfig};
pub use manifest::{ManifestKind, PackageResolver, PipfileResolver, RequirementsResolver};
pub use registry::{PackageChecker, PypiChecker};
pub use scanner::{scan_manifest, ScanResult};
pub use types::{ConfusionError, RegistryCheck, RegistryConfig, Result};
