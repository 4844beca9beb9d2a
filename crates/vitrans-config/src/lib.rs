//! vitrans-config: Settings file, `.env` and environment resolution.
//!
//! The API key only ever comes from the process environment. Model and
//! endpoint come from `~/.vitrans/config.json5`, overridable by env vars.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];
pub const MODEL_VAR: &str = "VITRANS_MODEL";
pub const BASE_URL_VAR: &str = "VITRANS_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Config directory not found")]
    NoDirFound,
    #[error("API_KEY environment variable is not set.")]
    MissingApiKey,
    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Contents of the optional config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    /// Model ID passed to the generative service.
    #[serde(default = "default_model")]
    pub model: String,
    /// Service endpoint root, without the `/v1beta/...` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

/// Secret credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Fully resolved configuration handed to the translation client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub base_url: Url,
}

impl AppConfig {
    /// Build a config directly, e.g. for tests pointing at a mock server.
    pub fn new(
        api_key: ApiKey,
        model: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key,
            model: model.into(),
            base_url: parse_base_url(base_url)?,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

/// Resolve the vitrans config directory (~/.vitrans/).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".vitrans"))
        .ok_or(ConfigError::NoDirFound)
}

/// Resolve the config file path (~/.vitrans/config.json5).
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json5"))
}

/// Load the full configuration: `.env`, config file, then environment.
///
/// Fails with [`ConfigError::MissingApiKey`] when no credential is set,
/// which callers treat as fatal at startup.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let file = match config_file_path() {
        Ok(path) => load_file_config_from(&path)?,
        Err(e) => {
            tracing::debug!("{e}, using default settings");
            FileConfig::default()
        }
    };
    resolve(file, |name| std::env::var(name).ok())
}

/// Load the config file from a specific path, falling back to defaults if not found.
pub fn load_file_config_from(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = json5::from_str(&content)?;
    Ok(config)
}

/// Combine file settings with variables from `lookup`.
pub fn resolve<F>(file: FileConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let api_key = API_KEY_VARS
        .iter()
        .find_map(|name| non_blank(*name))
        .map(ApiKey::new)
        .ok_or(ConfigError::MissingApiKey)?;

    let model = non_blank(MODEL_VAR).unwrap_or(file.model);
    let base_url = non_blank(BASE_URL_VAR).unwrap_or(file.base_url);

    Ok(AppConfig {
        api_key,
        model,
        base_url: parse_base_url(&base_url)?,
    })
}
