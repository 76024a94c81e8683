use crate::constants::{self, defaults, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the gateway.
/// Handles loading, saving, and overriding settings from the environment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the BoardGameGeek XML API, without trailing slash.
    #[serde(default = "default_bgg_api_url")]
    pub bgg_api_url: String,
    /// Base URL of the OpenAI-compatible completion API.
    #[serde(default = "default_openai_api_base")]
    pub openai_api_base: String,
    /// API key for the completion API. Usually supplied via `OPENAI_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    /// Completion model used for explanations.
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Upper bound on generated tokens per explanation.
    #[serde(default = "default_completion_max_tokens")]
    pub completion_max_tokens: u32,
    /// Sampling temperature for explanations.
    #[serde(default = "default_completion_temperature")]
    pub completion_temperature: f32,
    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for upstream requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_bgg_api_url() -> String {
    defaults::BGG_API_URL.to_string()
}

fn default_openai_api_base() -> String {
    defaults::OPENAI_API_BASE.to_string()
}

fn default_openai_model() -> String {
    defaults::OPENAI_MODEL.to_string()
}

fn default_completion_max_tokens() -> u32 {
    defaults::COMPLETION_MAX_TOKENS
}

fn default_completion_temperature() -> f32 {
    defaults::COMPLETION_TEMPERATURE
}

fn default_port() -> u16 {
    constants::DEFAULT_PORT
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bgg_api_url: default_bgg_api_url(),
            openai_api_base: default_openai_api_base(),
            openai_api_key: None,
            openai_model: default_openai_model(),
            completion_max_tokens: default_completion_max_tokens(),
            completion_temperature: default_completion_temperature(),
            port: default_port(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `BGG_API_URL` - Override XML API base URL
    /// - `OPENAI_API_BASE` - Override completion API base URL
    /// - `OPENAI_API_KEY` - Completion API key
    /// - `OPENAI_MODEL` - Override completion model
    /// - `PORT` - Override server port
    /// - `GATEWAY_LOG_FILE` - Override log file path
    /// - `GATEWAY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_file(&get_config_path()).await
    }

    /// Loads configuration from `path` when it exists, otherwise from defaults,
    /// then applies environment overrides and validates the result.
    pub async fn load_with_file(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::BGG_API_URL) {
            self.bgg_api_url = url;
        }

        if let Ok(base) = std::env::var(env_vars::OPENAI_API_BASE) {
            self.openai_api_base = base;
        }

        if let Ok(key) = std::env::var(env_vars::OPENAI_API_KEY)
            && !key.trim().is_empty()
        {
            self.openai_api_key = Some(key);
        }

        if let Ok(model) = std::env::var(env_vars::OPENAI_MODEL) {
            self.openai_model = model;
        }

        if let Some(port) = std::env::var(env_vars::PORT)
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.port = port;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        self.bgg_api_url = self.bgg_api_url.trim_end_matches('/').to_string();
        self.openai_api_base = self.openai_api_base.trim_end_matches('/').to_string();
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints the effective configuration to stdout, masking the API key.
    pub fn display(&self, config_path: &str) {
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not present, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("BGG API URL:");
        println!("{}", self.bgg_api_url);
        println!("────────────────────────────────────");
        println!("Completion API:");
        println!("{} ({})", self.openai_api_base, self.openai_model);
        println!(
            "API key: {}",
            if self.openai_api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        println!("────────────────────────────────────");
        println!("Server Port:");
        println!("{}", self.port);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        match &self.log_file_path {
            Some(custom_path) => println!("{custom_path}"),
            None => {
                println!("{}/boardgame_gateway.log", get_log_dir_path());
                println!("(Default location)");
            }
        }
    }

    /// Saves configuration to a custom file path, creating the parent directory.
    /// The API key is never written to disk.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            openai_api_key: None,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
