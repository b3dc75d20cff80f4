//! Connected account summary with a disconnect button

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn AccountDetails(short_address: String) -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="app-details">
            <span>"Connected account"</span>
            <span class="address">{short_address}</span>
            <button
                class="btn-disconnect"
                disabled=move || wallet_ctx.pending.get()
                on:click=move |_| wallet_ctx.disconnect()
            >
                "Disconnect"
            </button>
        </div>
    }
}
