//! Browser-side services: email-link auth interop and the mint API client.

pub mod magic;
pub mod mint;
