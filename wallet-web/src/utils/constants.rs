//! Application constants
//!
//! Settings baked in at build time (`MAGIC_PUBLISHABLE_KEY=pk_... trunk build`).

/// Base URL of the mint backend; empty means same origin.
pub const MINT_API_BASE: &str = match option_env!("MINT_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Public key of the email-link provider.
pub const MAGIC_PUBLISHABLE_KEY: &str = match option_env!("MAGIC_PUBLISHABLE_KEY") {
    Some(key) => key,
    None => "",
};

pub const MAGIC_RPC_URL: &str = match option_env!("MAGIC_RPC_URL") {
    Some(url) => url,
    None => "https://mumbai.magic.io/rpc",
};

pub const MAGIC_CHAIN_ID: u32 = match option_env!("MAGIC_CHAIN_ID") {
    Some(id) => parse_u32(id),
    None => 80_001,
};

// UI text
pub const MINT_FAILED_ALERT: &str = "Something went wrong. Please try again.";

const fn parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "MAGIC_CHAIN_ID must be a decimal number");
        value = value * 10 + (digit - b'0') as u32;
        i += 1;
    }
    value
}
