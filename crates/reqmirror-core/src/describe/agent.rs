//! User-Agent classification via woothee.
//!
//! woothee reports `"UNKNOWN"` (or an empty string) for fields it cannot
//! classify; both are normalized to `None` here so unknown values strip out
//! of serialized descriptions.

use serde::Serialize;
use woothee::parser::Parser;

use super::clean;

/// Parsed device section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// Device class reported by the parser (e.g. "pc", "smartphone").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl DeviceInfo {
    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.vendor.is_none()
    }
}

/// Parsed operating-system section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl OsInfo {
    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.version.is_none()
    }
}

/// Parsed browser section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BrowserInfo {
    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.version.is_none()
    }
}

/// The three User-Agent-derived sections of a description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentSections {
    pub device: DeviceInfo,
    pub os: OsInfo,
    pub browser: BrowserInfo,
}

/// woothee's sentinel for fields it cannot classify.
const VALUE_UNKNOWN: &str = "UNKNOWN";

fn field<S: AsRef<str>>(v: S) -> Option<String> {
    if v.as_ref() == VALUE_UNKNOWN {
        return None;
    }
    clean(v)
}

/// Classify a raw `User-Agent` header value.
///
/// A missing, empty, or unclassifiable value yields empty sections — parse
/// failure is degradation, never an error.
pub fn parse_user_agent(ua: &str) -> AgentSections {
    let Some(result) = Parser::new().parse(ua) else {
        if !ua.is_empty() {
            tracing::debug!(ua, "user agent not classified");
        }
        return AgentSections::default();
    };

    AgentSections {
        device: DeviceInfo {
            family: field(result.category),
            vendor: field(result.vendor),
        },
        os: OsInfo {
            family: field(result.os),
            version: field(&*result.os_version),
        },
        browser: BrowserInfo {
            family: field(result.name),
            version: field(result.version),
        },
    }
}
