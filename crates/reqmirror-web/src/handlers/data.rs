//! `GET /data.json`, `/data.png`, `/data.jpeg` — machine renderings.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use bytes::Bytes;

use reqmirror_core::error::ReqMirrorError;
use reqmirror_core::render;
use reqmirror_core::render::image::OutputFormat;

use crate::app_state::AppState;
use crate::describe::describe;

use super::HandlerError;

pub async fn as_json(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HandlerError> {
    let description = describe(&state, peer, &headers).await;
    let body = serde_json::to_string_pretty(&description)
        .map_err(|e| ReqMirrorError::Internal(format!("description serialize failed: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub async fn as_png(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HandlerError> {
    as_image(state, peer, headers, OutputFormat::Png).await
}

pub async fn as_jpeg(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HandlerError> {
    as_image(state, peer, headers, OutputFormat::Jpeg).await
}

async fn as_image(
    state: AppState,
    peer: SocketAddr,
    headers: HeaderMap,
    format: OutputFormat,
) -> Result<impl IntoResponse, HandlerError> {
    let description = describe(&state, peer, &headers).await;
    let text = render::text::render(&description)?;
    let bytes = render::image::render_encoded(&text, format)?;
    Ok((
        [(header::CONTENT_TYPE, format.content_type())],
        Bytes::from(bytes),
    ))
}
