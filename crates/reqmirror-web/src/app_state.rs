//! Shared application state for the reqmirror service.

use std::sync::Arc;
use std::time::Duration;

use reqmirror_core::error::Result;

use crate::config::AppConfig;
use crate::geo::GeoResolver;
use crate::stats::Stats;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    stats: Stats,
    geo: GeoResolver,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let geo = GeoResolver::new(
            &cfg.geo.endpoint,
            Duration::from_millis(cfg.geo.timeout_ms),
            cfg.geo.cache_capacity,
        )?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                stats: Stats::default(),
                geo,
            }),
        })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn stats(&self) -> &Stats {
        &self.inner.stats
    }

    pub fn geo(&self) -> &GeoResolver {
        &self.inner.geo
    }
}
