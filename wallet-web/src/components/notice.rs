//! Inline, non-fatal report of the last failed wallet request

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Notice() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || {
        wallet_ctx
            .notice
            .get()
            .map(|message| view! { <p class="app-notice">{message}</p> })
    }
}
