//! Request description model (typed, self-stripping).
//!
//! Every category is an explicit record of optional fields. Empty values are
//! normalized to `None` at construction and skipped at serialization, so a
//! serialized description never contains `null`, `""`, or empty sections.
//! Field order in output follows declaration order.

use serde::Serialize;

pub mod agent;

pub use agent::{parse_user_agent, AgentSections, BrowserInfo, DeviceInfo, OsInfo};

/// Normalize a possibly-empty string value to `Option`.
pub(crate) fn clean<S: AsRef<str>>(v: S) -> Option<String> {
    let s = v.as_ref().trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Best-effort city/country for a client IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    /// Build a location, dropping empty strings.
    pub fn new(city: Option<String>, country: Option<String>) -> Self {
        Self {
            city: city.and_then(clean),
            country: country.and_then(clean),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.country.is_none()
    }
}

/// Structured description of one incoming request.
///
/// Built fresh per request, never persisted. Sections with no populated
/// fields vanish from serialized output entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestDescription {
    pub ip: String,
    #[serde(skip_serializing_if = "Location::is_empty")]
    pub location: Location,
    #[serde(skip_serializing_if = "DeviceInfo::is_empty")]
    pub device: DeviceInfo,
    #[serde(skip_serializing_if = "OsInfo::is_empty")]
    pub os: OsInfo,
    #[serde(skip_serializing_if = "BrowserInfo::is_empty")]
    pub browser: BrowserInfo,
}

impl RequestDescription {
    /// Assemble a description from its parts.
    pub fn new(ip: String, location: Location, agent: AgentSections) -> Self {
        Self {
            ip,
            location,
            device: agent.device,
            os: agent.os,
            browser: agent.browser,
        }
    }
}
