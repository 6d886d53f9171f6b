//! `GET /` — HTML page with the described request and top stats.

use std::fmt::Write;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Html;

use reqmirror_core::render;

use crate::app_state::AppState;
use crate::describe::describe;
use crate::stats::TopStats;

use super::HandlerError;

pub async fn index(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Html<String>, HandlerError> {
    let description = describe(&state, peer, &headers).await;
    let text = render::text::render(&description)?;
    let top = state.stats().top();
    Ok(Html(page(&text, &top)))
}

fn page(text: &str, top: &TopStats) -> String {
    let mut lists = String::new();
    for (name, rows) in top.categories() {
        let _ = write!(lists, "<h2>{name}</h2>\n");
        if rows.is_empty() {
            lists.push_str("<p>no data yet</p>\n");
            continue;
        }
        lists.push_str("<ol>\n");
        for (value, count) in rows {
            let _ = writeln!(lists, "<li>{} ({count})</li>", escape(value));
        }
        lists.push_str("</ol>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>reqmirror</title></head>\n<body>\n\
         <h1>your request</h1>\n<pre>{}</pre>\n<h1>top seen</h1>\n{lists}</body>\n</html>\n",
        escape(text)
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<script>&\"'"), "&lt;script&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn page_embeds_text_and_lists() {
        let top = TopStats {
            device: vec![("pc".to_string(), 3)],
            os: vec![],
            browser: vec![("Chrome".to_string(), 3)],
            country: vec![],
        };
        let html = page("{\n  \"ip\": \"203.0.113.5\"\n}", &top);
        assert!(html.contains("203.0.113.5"));
        assert!(html.contains("<li>pc (3)</li>"));
        assert!(html.contains("no data yet"));
    }
}
