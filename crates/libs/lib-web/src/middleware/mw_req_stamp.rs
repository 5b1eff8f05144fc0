//! # Request Stamping Middleware
//!
//! Adds a request ID to requests for tracing and debugging.
//!
//! Every response carries the ID in `X-Request-ID`. An ID sent by a proxy in the
//! same header is kept when it looks sane, otherwise a fresh UUID v4 is used.
//!
//! Request ID is available in handlers via `Extension<RequestStamp>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::mw_req_stamp::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_FORWARDED_ID_LEN: usize = 64;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
}

fn forwarded_id(req: &Request) -> Option<String> {
    let id = req.headers().get(&REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    let sane = !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    sane.then(|| id.to_string())
}

/// Request stamping middleware.
///
/// Adds the stamp to request extensions and the ID to the `X-Request-ID`
/// response header.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let id = forwarded_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());
    let stamp = RequestStamp { id };

    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::Extension, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(stamp): Extension<RequestStamp>| async move { stamp.id }),
            )
            .layer(axum::middleware::from_fn(stamp_req))
    }

    #[tokio::test]
    async fn test_generates_id() {
        let res = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let header = res.headers()[&REQUEST_ID_HEADER].to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&header).is_ok());

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, header.as_bytes());
    }

    #[tokio::test]
    async fn test_keeps_forwarded_id() {
        let res = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "edge-7f3a_01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.headers()[&REQUEST_ID_HEADER], "edge-7f3a_01");
    }

    #[tokio::test]
    async fn test_replaces_unsafe_forwarded_id() {
        let res = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "a b;c")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let header = res.headers()[&REQUEST_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(header).is_ok());
    }
}
