//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::core::errors::{Result, TranslatorError};

/// Token issuance endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";
/// Scheme and host of the translator API
pub const DEFAULT_API_BASE: &str = "https://api.microsofttranslator.com";
/// Path of the language detection operation
pub const DEFAULT_DETECT_PATH: &str = "/v2/Http.svc/Detect";
/// Path of the translation operation
pub const DEFAULT_TRANSLATE_PATH: &str = "/v2/Http.svc/Translate";

/// Endpoints and connection settings used by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Full URL of the token issuance endpoint
    pub token_url: String,
    /// Scheme and host of the translator API; any path here is rejected
    pub api_base: String,
    /// Path of the detect operation
    pub detect_path: String,
    /// Path of the translate operation
    pub translate_path: String,
    /// Idle connections kept per host
    pub max_idle_connections: usize,
    /// How long an idle connection stays in the pool
    pub idle_timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            detect_path: DEFAULT_DETECT_PATH.to_string(),
            translate_path: DEFAULT_TRANSLATE_PATH.to_string(),
            max_idle_connections: 10,
            idle_timeout_ms: 10_000,
        }
    }
}

impl TranslatorConfig {
    /// Point both the token and API endpoints at one base URL, keeping the default paths.
    ///
    /// Handy for local mocks and proxies that serve everything from one host.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            token_url: format!("{}/sts/v1.0/issueToken", base),
            api_base: base.to_string(),
            ..Default::default()
        }
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.token_url)?;

        let base = Url::parse(&self.api_base)?;
        if base.cannot_be_a_base() {
            return Err(TranslatorError::ConfigError {
                message: format!("api_base cannot carry a path: {:?}", self.api_base),
            });
        }
        if base.path() != "/" {
            return Err(TranslatorError::ConfigError {
                message: format!(
                    "api_base must not contain a path, put it in detect_path/translate_path: {:?}",
                    self.api_base
                ),
            });
        }

        for (name, path) in [
            ("detect_path", &self.detect_path),
            ("translate_path", &self.translate_path),
        ] {
            if !path.starts_with('/') {
                return Err(TranslatorError::ConfigError {
                    message: format!("{} must start with '/': {:?}", name, path),
                });
            }
        }

        if self.max_idle_connections == 0 {
            return Err(TranslatorError::ConfigError {
                message: "max_idle_connections must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Idle connection timeout as a `Duration`
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    /// Full URL of the detect operation, without query
    pub fn detect_url(&self) -> Result<Url> {
        self.operation_url(&self.detect_path)
    }

    /// Full URL of the translate operation, without query
    pub fn translate_url(&self) -> Result<Url> {
        self.operation_url(&self.translate_path)
    }

    fn operation_url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)?;
        url.set_path(path);
        Ok(url)
    }
}
