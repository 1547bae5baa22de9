//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `SITE_ROOT`: directory holding the built `pkg/` assets; defaults to the
//!   Leptos `site-root`
//! - `API_ENDPOINT`: content service base URL published to the page as
//!   `<meta name="api-endpoint">`; when unset the client uses its built-in
//!   default
//!
//! A `.env` file in the working directory is loaded first when present.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
    #[error("invalid API_ENDPOINT {0:?}: expected an http(s) URL")]
    InvalidEndpoint(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub site_root: Option<PathBuf>,
    pub api_endpoint: Option<String>,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(lookup("PORT").as_deref())?,
            site_root: non_blank(lookup("SITE_ROOT").as_deref()).map(PathBuf::from),
            api_endpoint: parse_endpoint(lookup("API_ENDPOINT").as_deref())?,
        })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(DEFAULT_PORT);
    };
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_endpoint(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(None);
    };
    let has_host = ["http://", "https://"]
        .iter()
        .find_map(|scheme| value.strip_prefix(scheme))
        .is_some_and(|rest| !rest.trim_matches('/').is_empty());
    if !has_host {
        return Err(ConfigError::InvalidEndpoint(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}
