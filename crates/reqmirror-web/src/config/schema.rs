use serde::Deserialize;

use reqmirror_core::error::{ReqMirrorError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub geo: GeoSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            geo: GeoSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReqMirrorError::UnsupportedVersion);
        }
        self.geo.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoSection {
    /// Base URL of the ipinfo-style lookup service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for GeoSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl GeoSection {
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ReqMirrorError::BadRequest(
                "geo.endpoint must be an http(s) URL".into(),
            ));
        }
        if !(100..=30000).contains(&self.timeout_ms) {
            return Err(ReqMirrorError::BadRequest(
                "geo.timeout_ms must be between 100 and 30000".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(ReqMirrorError::BadRequest(
                "geo.cache_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_endpoint() -> String {
    "https://ipinfo.io".into()
}
fn default_timeout_ms() -> u64 {
    2000
}
fn default_cache_capacity() -> usize {
    100_000
}
