//! Configuration handling for the scanner.

use crate::manifest::ManifestKind;
use crate::types::{ConfusionError, RegistryConfig, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use url::Url;

/// Dependency confusion scanner for Python manifests.
#[derive(Parser, Debug, Clone)]
#[command(name = "pyconfused")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan manifests for packages missing from the public registry
    Scan(ScanConfig),
}

/// Configuration for a scan.
#[derive(Parser, Debug, Clone)]
pub struct ScanConfig {
    /// Manifest file(s) to scan (requirements.txt or Pipfile)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Manifest format: pip or pipenv (detected from the file name if omitted)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Base URL of the public registry
    #[arg(long, env = "PYCONFUSED_REGISTRY_URL", default_value = "https://pypi.org")]
    pub registry_url: String,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Custom User-Agent string
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            lang: None,
            registry_url: "https://pypi.org".to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl ScanConfig {
    /// Get registry configuration from scan config.
    pub fn registry_config(&self, verbose: bool) -> Result<RegistryConfig> {
        let url = Url::parse(&self.registry_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfusionError::Config(format!(
                "registry URL must be http(s), got '{}'",
                self.registry_url
            )));
        }

        let defaults = RegistryConfig::default();
        Ok(RegistryConfig {
            registry_url: self.registry_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            verbose,
        })
    }

    /// Manifest format for `path`: the `--lang` override, or detection by
    /// file name.
    pub fn manifest_kind(&self, path: &Path) -> Result<ManifestKind> {
        match self.lang {
            Some(ref lang) => lang.parse(),
            None => Ok(ManifestKind::detect(path)),
        }
    }
}
