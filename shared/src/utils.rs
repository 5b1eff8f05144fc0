//! # Shared Utility Functions
//!
//! Common utility functions used across the backend and wallet-web applications.
//!
//! ## Address Formatting
//!
//! Functions for formatting EVM wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the usual `0x1234...abcd` shape
//!
//! ## Media URLs
//!
//! - [`resolve_media_url`] - Rewrite `ipfs://` URIs onto an HTTP gateway so browsers can load them
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x5aAe...eAed");
//! ```

/// Public IPFS gateway used when the page renders `ipfs://` media.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 6, 4), "0x5aAe...eAed");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address as `0x` + 4 digits, ellipsis, last 4 digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(truncate_address(addr), "0x5aAe...eAed");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Rewrite an `ipfs://` URI onto `gateway`; other URLs are returned unchanged.
///
/// ```rust
/// use shared::utils::resolve_media_url;
///
/// assert_eq!(
///     resolve_media_url("ipfs://QmHash/1.png", "https://ipfs.io/ipfs/"),
///     "https://ipfs.io/ipfs/QmHash/1.png"
/// );
/// assert_eq!(resolve_media_url("https://a.b/c.png", "https://ipfs.io/ipfs/"), "https://a.b/c.png");
/// ```
pub fn resolve_media_url(uri: &str, gateway: &str) -> String {
    match uri.strip_prefix("ipfs://") {
        Some(rest) => {
            let rest = rest.strip_prefix("ipfs/").unwrap_or(rest);
            format!("{}/{}", gateway.trim_end_matches('/'), rest)
        }
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(format_address(addr, 6, 4), "0x5aAe...eAed");
        assert_eq!(format_address(addr, 2, 2), "0x...ed");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42";
        assert_eq!(truncate_address(addr), "0xBB1B...aa42");
    }

    #[test]
    fn test_resolve_media_url() {
        assert_eq!(
            resolve_media_url("ipfs://ipfs/QmHash/2.png", "https://gw.example/ipfs/"),
            "https://gw.example/ipfs/QmHash/2.png"
        );
        assert_eq!(resolve_media_url("data:image/png;base64,AA", DEFAULT_IPFS_GATEWAY), "data:image/png;base64,AA");
    }
}
