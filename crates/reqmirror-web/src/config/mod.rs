//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::net::SocketAddr;

use reqmirror_core::error::{ReqMirrorError, Result};

pub use schema::{AppConfig, GeoSection, ServerSection};

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ReqMirrorError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| ReqMirrorError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the config file if present; an absent file means defaults, a
/// present-but-invalid file is a startup error.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if fs::metadata(path).is_err() {
        return Ok(AppConfig::default());
    }
    load_from_file(path)
}

/// Resolve the listen address, applying the `PORT` env convention on top of
/// the configured address when set.
pub fn listen_addr(cfg: &AppConfig, port: Option<&str>) -> Result<SocketAddr> {
    let mut addr: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|_| ReqMirrorError::BadRequest("server.listen must be a valid SocketAddr".into()))?;
    if let Some(raw) = port {
        let p: u16 = raw
            .parse()
            .map_err(|_| ReqMirrorError::BadRequest(format!("PORT must be a port number, got {raw:?}")))?;
        addr.set_port(p);
    }
    Ok(addr)
}
