use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://platform.fatsecret.com/rest";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // FatSecret OAuth2 client credentials
    pub client_id: String,
    pub client_secret: String,
    pub oauth_url: String,
    pub scope: String,
    // FatSecret REST API
    pub api_url: String,
    pub token_safety_margin_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests don't have to touch the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = optional("PORT", "8080");
        let margin = optional("TOKEN_SAFETY_MARGIN_SECS", "60");

        let config = Config {
            host: optional("HOST", "0.0.0.0"),
            port: port.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: port.clone(),
            })?,
            log_format: match optional("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            client_id: required("FATSECRET_CLIENT_ID")?,
            client_secret: required("FATSECRET_CLIENT_SECRET")?,
            oauth_url: required("FATSECRET_OAUTH_URL")?,
            scope: required("FATSECRET_SCOPE")?,
            api_url: optional("FATSECRET_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token_safety_margin_secs: margin.parse().map_err(|_| ConfigError::Invalid {
                key: "TOKEN_SAFETY_MARGIN_SECS",
                value: margin.clone(),
            })?,
        };

        Ok(config)
    }

    pub fn token_safety_margin(&self) -> Duration {
        Duration::from_secs(self.token_safety_margin_secs)
    }
}
