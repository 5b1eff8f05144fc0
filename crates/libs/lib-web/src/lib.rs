//! # Web Library
//!
//! HTTP handlers, middleware, the mint service and server setup.

pub mod handlers;
pub mod middleware;
pub mod services;
pub mod server;

pub use server::{create_router, init_tracing, start_server, AppState, ServerConfig};
