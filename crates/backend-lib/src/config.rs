// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "roomgate.toml";

/// Default token lifetime (6 hours), matching the LiveKit server SDK
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 6 * 60 * 60;

/// Longest token lifetime accepted from configuration (30 days)
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Prefix for environment overrides of any field
pub const ENV_PREFIX: &str = "ROOMGATE_";

/// Unprefixed environment variables honoured for compatibility with
/// existing deployments
const RAW_ENV_KEYS: [&str; 5] = [
    "port",
    "livekit_url",
    "livekit_api_key",
    "livekit_api_secret",
    "log_level",
];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Interface to bind
    pub host: IpAddr,
    /// Listen port
    pub port: u16,
    /// Connection URL of the media platform, handed to clients verbatim
    pub livekit_url: String,
    /// API key used as the token issuer
    pub livekit_api_key: Option<String>,
    /// API secret used to sign tokens
    pub livekit_api_secret: Option<String>,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Lifetime of issued tokens in seconds
    pub token_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3001,
            livekit_url: "ws://localhost:7880".to_string(),
            livekit_api_key: None,
            livekit_api_secret: None,
            log_level: "info".to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl Settings {
    /// Load settings from `roomgate.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from the given TOML file (if it exists) and the environment.
    ///
    /// Precedence, lowest first: defaults, file, raw env vars, `ROOMGATE_` env vars.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::raw().only(&RAW_ENV_KEYS))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check the settings for values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("port must be non-zero");
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            bail!(
                "invalid log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            );
        }
        if self.livekit_url.trim().is_empty() {
            bail!("livekit_url must not be empty");
        }
        if self.token_ttl_secs == 0 {
            bail!("token_ttl_secs must be greater than zero");
        }
        if self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            bail!("token_ttl_secs must not exceed {MAX_TOKEN_TTL_SECS}");
        }
        if self.livekit_api_key.is_some() != self.livekit_api_secret.is_some() {
            bail!("livekit_api_key and livekit_api_secret must be set together");
        }
        Ok(())
    }

    /// Socket address to listen on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// API key and secret, if both are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.livekit_api_key, &self.livekit_api_secret) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some((key.as_str(), secret.as_str()))
            },
            _ => None,
        }
    }
}
