//! reqmirror web service.
//!
//! Echoes metadata about the incoming request (IP-derived location, parsed
//! device/OS/browser) as HTML, JSON, or a rendered image, and tallies the
//! most common values seen.
//! - Routes: /, /data.json, /data.png, /data.jpeg
//! - PORT env overrides the listen port
//! - Cloud-runtime marker selects structured JSON logs

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use reqmirror_web::{app_state, config, router};

/// Presence of this env var means we run on a cloud runtime.
const CLOUD_MARKER_ENV: &str = "K_SERVICE";

const CONFIG_PATH: &str = "reqmirror.yaml";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var_os(CLOUD_MARKER_ENV).is_some() {
        fmt().json().with_env_filter(filter).init();
        tracing::info!("using structured cloud logging");
    } else {
        fmt().with_env_filter(filter).init();
        tracing::info!("using standard logging");
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = config::listen_addr(&cfg, std::env::var("PORT").ok().as_deref())
        .expect("listen address must be valid");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "reqmirror-web starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
