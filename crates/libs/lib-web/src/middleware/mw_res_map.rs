//! # Response Mapping Middleware
//!
//! Gives every `/api/` error the same JSON shape the handlers use.
//!
//! Handlers already answer with `{"error", "code"}`. Rejections produced by axum
//! itself (405 on a wrong method, 413 on an oversized body) arrive as plain
//! text. This middleware rewrites those so the page can always decode an
//! [`ErrorResponse`].

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::error;

fn is_json(res: &Response) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

fn code_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "NotFound",
        s if s.is_client_error() => "InvalidInput",
        _ => "Internal",
    }
}

/// Response mapping middleware.
pub async fn map_res(req: Request, next: Next) -> Response {
    let is_api = req.uri().path().starts_with("/api/");
    let res = next.run(req).await;
    let status = res.status();

    if status.is_server_error() {
        error!("[RESPONSE] Server error: {}", status);
    }

    if !is_api || !(status.is_client_error() || status.is_server_error()) || is_json(&res) {
        return res;
    }

    let (parts, _) = res.into_parts();
    let body = ErrorResponse {
        error: status.canonical_reason().unwrap_or("Request failed").to_string(),
        code: Some(code_for(status).to_string()),
    };

    let mut mapped = (status, Json(body)).into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            mapped.headers_mut().append(name.clone(), value.clone());
        }
    }

    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::post, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/echo", post(|| async { "ok" }))
            .route("/page", post(|| async { "ok" }))
            .layer(axum::middleware::from_fn(map_res))
    }

    #[tokio::test]
    async fn test_wrong_method_becomes_json() {
        let res = app()
            .oneshot(Request::builder().uri("/api/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(res.headers().contains_key(header::ALLOW));

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Method Not Allowed");
        assert_eq!(error.code.as_deref(), Some("InvalidInput"));
    }

    #[tokio::test]
    async fn test_non_api_paths_untouched() {
        let res = app()
            .oneshot(Request::builder().uri("/page").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(!is_json(&res));
    }
}
