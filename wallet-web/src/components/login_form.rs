//! Email login form

use leptos::prelude::*;
use lib_utils::validate_email;

use crate::services::magic;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let (email, set_email) = signal(String::new());
    let (input_error, set_input_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if wallet_ctx.is_pending() {
            return;
        }

        let email = email.get_untracked().trim().to_string();
        if let Err(e) = validate_email(&email) {
            set_input_error.set(Some(e));
            return;
        }
        set_input_error.set(None);
        wallet_ctx.set_logging_in();

        leptos::task::spawn_local(async move {
            match magic::login_with_email(&email).await {
                Ok(address) => {
                    log::info!("[WALLET] Logged in as {}", address);
                    wallet_ctx.set_logged_in(address);
                }
                Err(e) => {
                    log::error!("[WALLET] Login failed: {}", e);
                    wallet_ctx.set_error(e.to_string());
                }
            }
        });
    };

    let error = move || input_error.get().or_else(|| wallet_ctx.error());

    view! {
        <form on:submit=on_submit>
            <h2>"Login With Email"</h2>
            <input
                class="input"
                type="email"
                placeholder="Your Email Address"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
                disabled=move || wallet_ctx.is_pending()
            />
            <button class="btn" type="submit" disabled=move || wallet_ctx.is_pending()>
                {move || if wallet_ctx.is_pending() { "Sending link..." } else { "Login" }}
            </button>
            {move || error().map(|e| view! { <p class="error">{e}</p> })}
        </form>
    }
}
