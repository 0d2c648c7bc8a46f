use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings read from the environment (and `.env` in development).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("BACKEND_URL"))?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "BACKEND_URL",
                value: backend_url,
            });
        }

        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid {
                    key: "BACKEND_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            backend_url,
            backend_timeout,
            production: lookup("PRODUCTION").is_some(),
        })
    }
}
