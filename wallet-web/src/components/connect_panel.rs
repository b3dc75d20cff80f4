//! Connect control for a located but unconnected provider

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectPanel() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="connect-panel">
            <h2>"Connect to Phantom Wallet"</h2>
            <button
                class="app-button"
                disabled=move || wallet_ctx.pending.get()
                on:click=move |_| wallet_ctx.connect()
            >
                "Connect Wallet"
            </button>
        </div>
    }
}
