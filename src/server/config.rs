//! Configuration loading for claimcheckd.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.claimcheck/config.toml` (user)
//! 3. `/etc/claimcheck/config.toml` (system)
//! 4. Built-in defaults when no file exists
//!
//! Secrets are loaded separately with mandatory permission checks:
//! 1. `~/.claimcheck/secrets.toml` (user, must be 0600)
//! 2. `/etc/claimcheck/secrets.toml` (system, must be 0600)
//! 3. `HF_API_TOKEN` environment variable

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::providers::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, HuggingFaceClient};
use crate::types::ClaimLimits;
use crate::{ClaimcheckError, Result};

/// Environment variable holding the HuggingFace API token.
pub const HF_TOKEN_ENV_VAR: &str = "HF_API_TOKEN";

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub limits: ClaimLimits,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000).
    #[serde(default = "default_address")]
    pub address: String,
    /// Allow cross-origin requests from any origin (default: true).
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            cors: default_cors(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_cors() -> bool {
    true
}

/// Remote model configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Inference endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HuggingFace client for this configuration.
    pub fn build_client(&self, api_token: impl Into<String>) -> Result<HuggingFaceClient> {
        HuggingFaceClient::with_endpoint(api_token, &self.endpoint, self.timeout())
    }
}

/// Secrets configuration (API tokens).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub huggingface: Option<ApiTokenSecret>,
}

/// A single API token secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTokenSecret {
    pub api_token: String,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.claimcheck/config.toml`
    /// 3. `/etc/claimcheck/config.toml`
    /// 4. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                tracing::info!("no config file found, using defaults");
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a single config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClaimcheckError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClaimcheckError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Reject values the service cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.limits.ensure_consistent()?;
        if self.model.timeout_secs == 0 {
            return Err(ClaimcheckError::Configuration(
                "model.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.model.endpoint.trim().is_empty() {
            return Err(ClaimcheckError::Configuration(
                "model.endpoint must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the config file path, if any.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ClaimcheckError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".claimcheck").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/claimcheck/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

impl Secrets {
    /// Load secrets from the standard locations with permission checks.
    ///
    /// Resolution order:
    /// 1. `~/.claimcheck/secrets.toml` (if exists, must be 0600)
    /// 2. `/etc/claimcheck/secrets.toml` (if exists, must be 0600)
    ///
    /// Returns empty secrets if no file exists (the token may come from the environment).
    pub fn load() -> Result<Self> {
        // Try user secrets first
        if let Some(home) = dirs::home_dir() {
            let user_secrets = home.join(".claimcheck").join("secrets.toml");
            if user_secrets.exists() {
                return Self::load_from_file(&user_secrets);
            }
        }

        // Try system secrets
        let system_secrets = PathBuf::from("/etc/claimcheck/secrets.toml");
        if system_secrets.exists() {
            return Self::load_from_file(&system_secrets);
        }

        Ok(Secrets::default())
    }

    /// Read a secrets file after checking its permissions.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_permissions(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            ClaimcheckError::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClaimcheckError::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    /// Check that the secrets file has secure permissions (0600 or 0400).
    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            ClaimcheckError::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        // Reject if group or other bits are set
        if mode & 0o077 != 0 {
            return Err(ClaimcheckError::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        // Permission check not available on non-Unix platforms
        Ok(())
    }

    /// HuggingFace token, falling back to `HF_API_TOKEN`.
    pub fn huggingface_token(&self) -> Option<String> {
        self.huggingface
            .as_ref()
            .map(|s| s.api_token.clone())
            .or_else(|| std::env::var(HF_TOKEN_ENV_VAR).ok())
            .filter(|token| !token.trim().is_empty())
    }
}
