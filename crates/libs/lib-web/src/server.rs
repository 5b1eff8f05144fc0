//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! [`start_server`] loads [`MintConfig`], connects the SDK gateway, builds the
//! router and serves it. [`create_router`] is separate so tests can drive the
//! full middleware stack with any [`DropSdk`].
//!
//! ## Routes
//!
//! | Method | Path            | Purpose                                   |
//! |--------|-----------------|-------------------------------------------|
//! | POST   | `/api/mint-nft` | Claim one token to `{address}`            |
//! | GET    | `/api/config`   | Network, chain id and contract of the drop |
//! | GET    | `/health`       | Liveness                                  |
//! | GET    | `/*`            | Built mint page from `WEB_DIST_DIR`       |

// region: --- Imports
use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{any, get, post},
    Json, Router,
};
use lib_chain::{DropSdk, GatewaySdk};
use lib_core::MintConfig;
use lib_utils::{get_env_opt, get_env_or};
use shared::ErrorResponse;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::handlers;
use crate::middleware::{log_requests, map_res, stamp_req, RequestStamp};
// endregion: --- Imports

// region: --- AppState
/// Mint context shared by every request.
///
/// Built once at startup and handed to the router with `with_state`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MintConfig>,
    pub sdk: Arc<dyn DropSdk>,
}

impl AppState {
    pub fn new(config: MintConfig, sdk: Arc<dyn DropSdk>) -> Self {
        Self {
            config: Arc::new(config),
            sdk,
        }
    }
}

impl FromRef<AppState> for Arc<MintConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn DropSdk> {
    fn from_ref(state: &AppState) -> Self {
        state.sdk.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3001")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
    /// Built mint page, served for every path the API does not claim
    pub dist_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3001".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
            dist_dir: Some(PathBuf::from("wallet-web/dist")),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `BIND_ADDRESS`, `WEB_DIST_DIR` and `ALLOWED_ORIGINS` (comma separated).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_origins = get_env_opt("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            bind_address: get_env_or("BIND_ADDRESS", &defaults.bind_address),
            allowed_origins,
            dist_dir: get_env_opt("WEB_DIST_DIR")
                .map(PathBuf::from)
                .or(defaults.dist_dir),
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Install the global tracing subscriber, filtered by `LOG_LEVEL` (default `info`).
///
/// Later calls are no-ops.
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(&log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!(" Log level: {}", log_level);
    }
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading or validation fails
/// - The SDK gateway client cannot be built
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();
    info!(" NFT MINT BACKEND STARTING");

    info!("Loading configuration...");
    let mint_config = MintConfig::load()?;
    info!(
        " Minting from {} on {} (chain {})",
        mint_config.contract_address,
        mint_config.network,
        mint_config.network.chain_id()
    );
    if !mint_config.network.is_testnet() {
        warn!(" {} is a mainnet, every claim spends real gas", mint_config.network);
    }

    info!(" Connecting SDK gateway at {}", mint_config.gateway_url);
    let sdk = GatewaySdk::from_config(&mint_config)?;

    let state = AppState::new(mint_config, Arc::new(sdk));
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::HeaderName::from_static("x-request-id")]);

    info!("[ROUTE SETUP] Registering HTTP routes...");
    let api = Router::new()
        .route("/api/mint-nft", post(handlers::mint::mint_nft))
        .route("/api/config", get(handlers::mint::public_config))
        .route("/api/{*rest}", any(api_not_found))
        .route("/health", get(|| async { "OK" }))
        .with_state(state);

    let app = match &config.dist_dir {
        Some(dir) if dir.is_dir() => {
            info!("[ROUTE SETUP] Serving mint page from {}", dir.display());
            let page = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            api.fallback_service(page)
        }
        Some(dir) => {
            warn!(
                "[ROUTE SETUP] Page directory {} not found, run `trunk build` in wallet-web",
                dir.display()
            );
            api.fallback(page_not_built)
        }
        None => api.fallback(page_not_built),
    };

    app
        // Innermost: rewrites bare error bodies before they are logged
        .layer(axum::middleware::from_fn(map_res))
        .layer(axum::middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(
                            error = ?error,
                            latency_ms = latency.as_millis(),
                            "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                            error,
                            latency.as_millis()
                        );
                    },
                ),
        )
        // Request stamping (adds request ID), must wrap the trace span
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

async fn api_not_found() -> (StatusCode, Json<ErrorResponse>) {
    info!("[404 HANDLER] Unmatched API route");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found".to_string(),
            code: Some("NotFound".to_string()),
        }),
    )
}

async fn page_not_built() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Mint page not built")
}

/// Log server information
fn log_server_info() {
    info!(" MINT:");
    info!("   • POST /api/mint-nft   {{\"address\": \"0x...\"}}");
    info!("   • GET  /api/config");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
