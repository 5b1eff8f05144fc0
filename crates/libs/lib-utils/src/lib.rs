//! # Utilities Library
//!
//! Shared utility functions for environment variables and input validation.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_or, get_env_parse_or};
pub use validation::{validate_email, validate_http_url, validate_range};
