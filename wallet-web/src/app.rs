//! NFT Drop minter - Leptos frontend

use leptos::prelude::*;

use crate::pages::HomePage;
use crate::services::magic;
use crate::state::mint::provide_mint_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let wallet_ctx = provide_wallet_context();
    provide_mint_context();

    // A session from an earlier visit skips the login form
    leptos::task::spawn_local(async move {
        match magic::restore_session().await {
            Ok(Some(address)) => {
                log::info!("[WALLET] Restored session for {}", address);
                wallet_ctx.set_logged_in(address);
            }
            Ok(None) => wallet_ctx.set_logged_out(),
            Err(e) => {
                log::warn!("[WALLET] Could not restore session: {}", e);
                wallet_ctx.set_logged_out();
            }
        }
    });

    view! {
        <div class="app-container">
            <HomePage/>
        </div>
    }
}
