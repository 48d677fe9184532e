//! Per-request tracing: trace-ID propagation, latency, and JSON body capture.
//!
//! Small JSON request bodies are buffered and logged; multipart uploads and
//! static assets pass through untouched so video bytes are never copied twice.

use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

/// Bodies larger than this are never captured in logs.
const MAX_LOGGED_BODY_BYTES: u64 = 1024;

pub async fn trace_middleware(
    State(_state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();

    // Honour an incoming trace ID so client and server logs correlate.
    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("→ request started");

        let (mut parts, body) = req.into_parts();
        let body = capture_json_body(&parts.headers, body).await;
        if let Ok(value) = trace_id.to_string().parse() {
            parts.headers.insert(X_TRACE_ID, value);
        }
        let req = Request::from_parts(parts, body);

        let mut response = next.run(req).await;

        if let Ok(value) = trace_id.to_string().parse() {
            response.headers_mut().insert(X_TRACE_ID, value);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Buffer and log the request body only when it is small JSON; anything else
/// (video uploads in particular) is returned unread.
async fn capture_json_body(headers: &header::HeaderMap, body: Body) -> Body {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    let small = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .is_some_and(|len| len <= MAX_LOGGED_BODY_BYTES);

    if !(is_json && small) {
        return body;
    }

    match body.collect().await {
        Ok(collected) => {
            let bytes = collected.to_bytes();
            if let Ok(text) = std::str::from_utf8(&bytes) {
                info!("request body: {}", text);
            }
            Body::from(bytes)
        }
        Err(_) => Body::empty(),
    }
}
