//! Core types and errors for the dependency confusion scanner.

use thiserror::Error;

/// Errors that can occur while reading manifests or building a checker.
///
/// Registry lookups never produce one of these; a failed lookup is reported
/// as [`RegistryCheck::CheckFailed`] instead.
#[derive(Error, Debug)]
pub enum ConfusionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ConfusionError>;

/// Outcome of looking a single package up on the public registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCheck {
    /// The registry answered 200 for the project page.
    Available,
    /// The registry answered with any other status.
    Unavailable { status: u16 },
    /// The request never completed (DNS, connect, timeout, ...).
    CheckFailed { error: String },
}

impl RegistryCheck {
    /// Whether the name is claimed on the public registry.
    ///
    /// `CheckFailed` counts as not claimed, so an outage reports every
    /// package as a potential confusion target.
    pub fn is_available(&self) -> bool {
        matches!(self, RegistryCheck::Available)
    }
}

/// Configuration for registry requests.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the registry, without trailing slash.
    pub registry_url: String,
    /// Optional request timeout. `None` keeps the client default.
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every lookup.
    pub user_agent: String,
    /// Log every lookup URL and status line.
    pub verbose: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry_url: "https://pypi.org".to_string(),
            timeout_secs: None,
            user_agent: "pyconfused/0.1".to_string(),
            verbose: false,
        }
    }
}

impl RegistryConfig {
    /// Default configuration with the given verbosity.
    pub fn with_verbose(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }
}
