//! Page state, provided through Leptos context.

pub mod mint;
pub mod wallet;
