//! Single page of the minter: login form or mint panel

use leptos::prelude::*;

use crate::components::{LoginForm, MintPanel};
use crate::state::wallet::{use_wallet_context, WalletState};

/// What the card shows. Login errors and the pending login keep the form
/// mounted, so the typed email survives them.
#[derive(Clone, PartialEq)]
enum Screen {
    Restoring,
    Login,
    Mint(String),
}

impl From<&WalletState> for Screen {
    fn from(state: &WalletState) -> Self {
        match state {
            WalletState::Restoring => Screen::Restoring,
            WalletState::LoggedIn { address } => Screen::Mint(address.clone()),
            WalletState::LoggedOut | WalletState::LoggingIn | WalletState::Error(_) => Screen::Login,
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let screen = Memo::new(move |_| wallet_ctx.wallet.with(|state| Screen::from(state)));

    let body = move || match screen.get() {
        Screen::Restoring => {
            view! { <p class="address">"Checking for an existing session..."</p> }.into_any()
        }
        Screen::Login => view! { <LoginForm/> }.into_any(),
        Screen::Mint(address) => view! { <MintPanel address=address/> }.into_any(),
    };

    view! {
        <div class="card">
            <h1 class="card-title">"NFT Drop"</h1>
            {body}
        </div>
    }
}
