//! Request describer: assembles the description for one incoming request.

use std::net::SocketAddr;

use axum::http::{header, HeaderMap};

use reqmirror_core::describe::{parse_user_agent, RequestDescription};

use crate::app_state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Client IP: the forwarded-for header value verbatim when present,
/// otherwise the socket peer address.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}

/// Describe one request: IP, memoized location, parsed User-Agent sections.
/// Tallies the description into the stats aggregator as a side effect —
/// every caller counts toward statistics.
pub async fn describe(state: &AppState, peer: SocketAddr, headers: &HeaderMap) -> RequestDescription {
    let ip = client_ip(headers, peer);
    let location = state.geo().resolve(&ip).await;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let agent = parse_user_agent(user_agent);

    let description = RequestDescription::new(ip, location, agent);
    state.stats().update(&description);
    description
}
