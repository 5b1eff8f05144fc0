//! Logged-in view: address, Mint button and the last minted token

use leptos::prelude::*;
use shared::truncate_address;

use crate::components::NftCard;
use crate::services::magic;
use crate::services::mint::HttpMintApi;
use crate::state::mint::{run_attempt, use_mint_context};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn MintPanel(address: String) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let mint_ctx = use_mint_context();

    let mint_address = address.clone();
    let on_mint = move |_| {
        let address = mint_address.clone();
        leptos::task::spawn_local(async move {
            let api = HttpMintApi::from_build_env();
            run_attempt(&mint_ctx, &api, &address).await;
        });
    };

    let on_logout = move |_| {
        mint_ctx.clear();
        leptos::task::spawn_local(async move {
            if let Err(e) = magic::logout().await {
                log::warn!("[WALLET] Logout failed: {}", e);
            }
            wallet_ctx.set_logged_out();
        });
    };

    view! {
        <div>
            <h2>"You're Connected!"</h2>
            <p class="address" title=address.clone()>{truncate_address(&address)}</p>
            <button class="btn" on:click=on_mint disabled=move || mint_ctx.loading()>
                {move || if mint_ctx.loading() { "Loading..." } else { "Mint NFT" }}
            </button>
            <button class="btn btn-secondary" on:click=on_logout disabled=move || mint_ctx.loading()>
                "Log out"
            </button>
            <Show when=move || mint_ctx.loading()>
                <p class="address">"Loading..."</p>
            </Show>
            {move || {
                mint_ctx.minted().map(|metadata| {
                    view! {
                        <h3>"Your Minted NFT"</h3>
                        <NftCard metadata=metadata/>
                    }
                })
            }}
        </div>
    }
}
