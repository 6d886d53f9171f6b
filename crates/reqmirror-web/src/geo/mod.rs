//! Client-IP geolocation: upstream lookup client + bounded memoization.

pub mod cache;
pub mod client;

use std::time::Duration;

use reqmirror_core::describe::Location;
use reqmirror_core::error::Result;

pub use cache::LocationCache;
pub use client::GeoClient;

/// Memoizing location resolver.
pub struct GeoResolver {
    client: GeoClient,
    cache: LocationCache,
}

impl GeoResolver {
    pub fn new(endpoint: &str, timeout: Duration, cache_capacity: usize) -> Result<Self> {
        Ok(Self {
            client: GeoClient::new(endpoint, timeout)?,
            cache: LocationCache::new(cache_capacity),
        })
    }

    /// Resolve `ip` to a best-effort location.
    ///
    /// First lookup of an IP performs one upstream call; the outcome —
    /// including an empty location from a failed or throttled call — is
    /// memoized. No lock is held across the network call, so concurrent
    /// first lookups of one IP may both reach upstream; last write wins.
    pub async fn resolve(&self, ip: &str) -> Location {
        if let Some(hit) = self.cache.get(ip) {
            return hit;
        }
        let location = self.client.lookup(ip).await;
        self.cache.insert(ip, location.clone());
        location
    }
}
