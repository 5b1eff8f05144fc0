//! # Request/Response Logging Middleware
//!
//! One line when a request arrives and one when its response leaves, both keyed
//! by the request ID. A failed mint can then be followed from the page's
//! `X-Request-ID` to the SDK calls logged inside the same span.
//!
//! Headers are logged at debug level with credentials redacted. Bodies are
//! never logged, the mint body carries nothing worth the noise.

use axum::{
    extract::Request,
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::mw_req_stamp::RequestStamp;

/// Header names containing any of these are redacted.
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "api-key", "auth-token", "private-key"];

const REDACTED: &str = "***REDACTED***";

/// Header list safe for logs.
fn sanitize_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str();
            if SENSITIVE_HEADERS.iter().any(|s| name.contains(s)) {
                return Some((name.to_string(), REDACTED.to_string()));
            }
            value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
        })
        .collect()
}

/// Tag for the response line; mint calls are the ones worth grepping for.
fn route_tag(method: &Method, path: &str) -> &'static str {
    match (method, path) {
        (&Method::POST, "/api/mint-nft") => "[MINT RESPONSE]",
        _ => "[RESPONSE]",
    }
}

fn log_response(request_id: &str, method: &Method, path: &str, status: StatusCode, elapsed: Duration, size: usize) {
    let tag = route_tag(method, path);
    let ms = elapsed.as_millis();
    let code = status.as_u16();

    if status.is_server_error() {
        error!(request_id, status = code, duration_ms = ms, "{} {} {} -> {} ({}ms)", tag, method, path, code, ms);
    } else if status.is_client_error() {
        warn!(request_id, status = code, duration_ms = ms, "{} {} {} -> {} ({}ms)", tag, method, path, code, ms);
    } else {
        info!(
            request_id,
            status = code,
            duration_ms = ms,
            size_bytes = size,
            "{} {} {} -> {} ({}ms, {} bytes)",
            tag,
            method,
            path,
            code,
            ms,
            size
        );
    }
}

/// Request/response logging middleware
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let client_ip = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    info!(
        request_id = %request_id,
        query = ?req.uri().query(),
        client_ip = ?client_ip,
        "[REQUEST] {} {}",
        method,
        path
    );
    debug!(request_id = %request_id, headers = ?sanitize_headers(req.headers()), "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(0);
    log_response(&request_id, &method, &path, response.status(), start.elapsed(), size);

    response
}
