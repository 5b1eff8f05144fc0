//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.
//!
//! Reads `BIND_ADDRESS`, `WEB_DIST_DIR` and `ALLOWED_ORIGINS` for the HTTP
//! surface. The mint settings (`PRIVATE_KEY`, `SDK_GATEWAY_URL`, ...) are
//! loaded by `lib-web` itself.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    start_server(ServerConfig::from_env()).await
}
