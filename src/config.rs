// src/config.rs
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.chec.io/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for the commerce API client.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl CommerceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub commerce: CommerceConfig,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("COMMERCE_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("COMMERCE_API_KEY"))?;

        let mut commerce = CommerceConfig::new(api_key);
        if let Some(url) = lookup("COMMERCE_API_URL") {
            commerce.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("COMMERCE_TIMEOUT_SECS") {
            let secs: u64 = parse_var("COMMERCE_TIMEOUT_SECS", secs)?;
            // A zero timeout fails every request before it is sent
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "COMMERCE_TIMEOUT_SECS",
                    value: secs.to_string(),
                });
            }
            commerce.timeout = Duration::from_secs(secs);
        }

        let host = match lookup("HOST") {
            Some(h) => parse_var("HOST", h)?,
            None => Ipv4Addr::LOCALHOST.into(),
        };
        let port = match lookup("PORT") {
            Some(p) => parse_var("PORT", p)?,
            None => 3000,
        };

        Ok(Self { commerce, host, port })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
