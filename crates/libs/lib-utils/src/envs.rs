//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, treating unset and blank the same way.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable or fall back to `default`.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable if set, otherwise return `default`.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_opt(name) {
        Some(val) => val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name)),
        None => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} must be set in environment"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so they can run in parallel.

    #[test]
    fn test_get_env_missing() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_MISSING", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_parse_or() {
        env::set_var("LIB_UTILS_TEST_PARSE", " 42 ");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE", 7u64), Ok(42));
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_UNSET", 7u64), Ok(7));

        env::set_var("LIB_UTILS_TEST_PARSE_BAD", "forty-two");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_PARSE_BAD", 7u64),
            Err(Error::WrongFormat("LIB_UTILS_TEST_PARSE_BAD"))
        );
    }

    #[test]
    fn test_blank_counts_as_unset() {
        env::set_var("LIB_UTILS_TEST_BLANK", "   ");
        assert_eq!(get_env_opt("LIB_UTILS_TEST_BLANK"), None);
    }
}
