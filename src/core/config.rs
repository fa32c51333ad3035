//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: API key from env with YAML secrets-file fallback, model/timeout/log level

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_SECRETS_PATH: &str = ".secrets.yaml";
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Startup configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key in the environment or the secrets file
    MissingApiKey { secrets_path: String },
    /// A numeric variable could not be parsed
    InvalidValue { var: String, value: String },
    /// The secrets file exists but is not a YAML mapping of strings
    UnreadableSecrets { path: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey { secrets_path } => write!(
                f,
                "OpenAI APIキーが設定されていません。\n\
                 次のいずれかの方法で設定してください:\n  \
                 1. 環境変数 {API_KEY_VAR} を設定する（.env ファイルでも可）\n  \
                 2. {secrets_path} に `{API_KEY_VAR}: sk-...` と記述する"
            ),
            ConfigError::InvalidValue { var, value } => {
                write!(f, "Invalid value for {var}: {value:?}")
            }
            ConfigError::UnreadableSecrets { path, reason } => {
                write!(f, "Failed to read secrets file {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub secrets_path: String,
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(flatten)]
    values: HashMap<String, serde_yaml::Value>,
}

impl Config {
    /// Build the config from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first if `.env` support is wanted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets_path = lookup("SECRETS_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SECRETS_PATH.to_string());

        let openai_api_key = match lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            Some(key) => key,
            None => {
                debug!("{API_KEY_VAR} not in environment, trying {secrets_path}");
                read_secret(&secrets_path, API_KEY_VAR)?
                    .ok_or_else(|| ConfigError::MissingApiKey {
                        secrets_path: secrets_path.clone(),
                    })?
            }
        };

        let openai_model = lookup("OPENAI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let request_timeout_secs = match lookup("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: "OPENAI_TIMEOUT_SECS".to_string(),
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            openai_api_key,
            openai_model,
            request_timeout_secs,
            log_level,
            secrets_path,
        })
    }
}

/// Read one key from the YAML secrets store. A missing file is not an error.
fn read_secret(path: &str, key: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::UnreadableSecrets {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    if contents.trim().is_empty() {
        return Ok(None);
    }

    let secrets: SecretsFile =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::UnreadableSecrets {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    Ok(secrets
        .values
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
