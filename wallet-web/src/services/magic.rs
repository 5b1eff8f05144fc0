//! Email-Link Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the Magic SDK loaded by `index.html` (`window.Magic`).
//! The SDK derives a wallet from the user's email; only its public address is
//! read here.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::utils::constants::{MAGIC_CHAIN_ID, MAGIC_PUBLISHABLE_KEY, MAGIC_RPC_URL};

// ============================================================================
// MAGIC SDK BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
let magic = null;

export function initMagic(publishableKey, rpcUrl, chainId) {
    if (magic) {
        return;
    }
    if (typeof window.Magic !== 'function') {
        throw new Error('Magic SDK script not loaded');
    }
    magic = new window.Magic(publishableKey, {
        network: { rpcUrl: rpcUrl, chainId: chainId },
    });
}

function requireMagic() {
    if (!magic) {
        throw new Error('Magic SDK not initialised');
    }
    return magic;
}

async function userInfo(m) {
    // getMetadata was renamed getInfo in newer SDK releases
    return typeof m.user.getInfo === 'function'
        ? await m.user.getInfo()
        : await m.user.getMetadata();
}

export async function loginWithEmail(email) {
    const m = requireMagic();
    await m.auth.loginWithMagicLink({ email: email });
    return await userInfo(m);
}

export async function currentUser() {
    const m = requireMagic();
    if (!(await m.user.isLoggedIn())) {
        return null;
    }
    return await userInfo(m);
}

export async function magicLogout() {
    await requireMagic().user.logout();
}
")]
extern "C" {
    /// Create the SDK instance (idempotent)
    #[wasm_bindgen(catch)]
    fn initMagic(publishable_key: &str, rpc_url: &str, chain_id: u32) -> Result<(), JsValue>;

    /// Send the login link and wait for the user to follow it
    #[wasm_bindgen(catch)]
    async fn loginWithEmail(email: &str) -> Result<JsValue, JsValue>;

    /// User info of an existing session, or `null`
    #[wasm_bindgen(catch)]
    async fn currentUser() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn magicLogout() -> Result<JsValue, JsValue>;
}

// ============================================================================
// AUTH SERVICE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email login is unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Failed(String),

    #[error("Login did not return a wallet address")]
    NoAddress,
}

/// What the SDK reports about the logged-in user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MagicUser {
    public_address: Option<String>,
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn address_of(user: JsValue) -> Result<Option<String>, AuthError> {
    if user.is_null() || user.is_undefined() {
        return Ok(None);
    }
    let user: MagicUser =
        serde_wasm_bindgen::from_value(user).map_err(|e| AuthError::Failed(e.to_string()))?;
    Ok(user.public_address.filter(|a| !a.trim().is_empty()))
}

/// Create the SDK instance with the compiled-in settings.
pub fn init() -> Result<(), AuthError> {
    if MAGIC_PUBLISHABLE_KEY.is_empty() {
        return Err(AuthError::Unavailable(
            "MAGIC_PUBLISHABLE_KEY was not set at build time".to_string(),
        ));
    }
    initMagic(MAGIC_PUBLISHABLE_KEY, MAGIC_RPC_URL, MAGIC_CHAIN_ID)
        .map_err(|e| AuthError::Unavailable(js_error_message(&e)))
}

/// Log in by email link and return the wallet address.
pub async fn login_with_email(email: &str) -> Result<String, AuthError> {
    init()?;
    let user = loginWithEmail(email)
        .await
        .map_err(|e| AuthError::Failed(js_error_message(&e)))?;
    address_of(user)?.ok_or(AuthError::NoAddress)
}

/// Address of a session that survived a reload, if any.
pub async fn restore_session() -> Result<Option<String>, AuthError> {
    init()?;
    let user = currentUser()
        .await
        .map_err(|e| AuthError::Failed(js_error_message(&e)))?;
    address_of(user)
}

pub async fn logout() -> Result<(), AuthError> {
    init()?;
    magicLogout()
        .await
        .map(|_| ())
        .map_err(|e| AuthError::Failed(js_error_message(&e)))
}
