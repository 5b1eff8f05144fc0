//! NFT Drop minter page
//!
//! Email-link wallet login plus a Mint button that asks the backend to claim
//! one token of the drop to the logged-in address.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] NFT Drop minter starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
