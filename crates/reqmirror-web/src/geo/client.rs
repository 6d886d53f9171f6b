//! ipinfo-style lookup client.

use std::time::Duration;

use serde::Deserialize;

use reqmirror_core::describe::Location;
use reqmirror_core::error::{ReqMirrorError, Result};

/// Fields consumed from the upstream response body.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

pub struct GeoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GeoClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReqMirrorError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Look `ip` up against the upstream service.
    ///
    /// The upstream allows roughly 50k lookups per month; transport errors,
    /// non-2xx statuses (throttling included), and undecodable bodies all
    /// degrade to an empty location. No retries.
    pub async fn lookup(&self, ip: &str) -> Location {
        match self.try_lookup(ip).await {
            Ok(location) => location,
            Err(e) => {
                tracing::debug!(ip, error = %e, "geolocation lookup failed");
                Location::default()
            }
        }
    }

    async fn try_lookup(&self, ip: &str) -> std::result::Result<Location, reqwest::Error> {
        let url = format!("{}/{}/json", self.endpoint, ip);
        let body: GeoResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(Location::new(body.city, body.country))
    }
}
