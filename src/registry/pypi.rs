//! PyPI checker for verifying package existence.

use crate::registry::PackageChecker;
use crate::types::{RegistryCheck, RegistryConfig, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Checker for verifying packages against the PyPI project pages.
pub struct PypiChecker {
    client: Client,
    registry_url: String,
    verbose: bool,
}

impl PypiChecker {
    /// Create a new PyPI checker.
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            registry_url: config.registry_url.trim_end_matches('/').to_string(),
            verbose: config.verbose,
        })
    }

    /// Project page URL for a package, e.g. `https://pypi.org/project/flask/`.
    pub fn project_url(&self, package_name: &str) -> String {
        format!(
            "{}/project/{}/",
            self.registry_url,
            urlencoding::encode(package_name)
        )
    }
}

impl PackageChecker for PypiChecker {
    async fn check(&self, package_name: &str) -> RegistryCheck {
        let url = self.project_url(package_name);
        if self.verbose {
            info!("Checking: {}", url);
        } else {
            trace!("Checking PyPI: {}", url);
        }

        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status();
                if self.verbose {
                    info!("{} : {}", url, status);
                } else {
                    debug!("{} : {}", url, status);
                }

                if status == StatusCode::OK {
                    RegistryCheck::Available
                } else {
                    RegistryCheck::Unavailable {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => {
                if self.verbose {
                    warn!("Error when trying to request {} : {}", url, e);
                } else {
                    debug!("Request failed for {}: {}", url, e);
                }
                RegistryCheck::CheckFailed {
                    error: e.to_string(),
                }
            }
        }
    }
}
