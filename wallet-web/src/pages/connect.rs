//! Connect Wallet Page
//!
//! Exactly one of the install prompt, the connect control or the connected
//! account details is shown, following the controller's [`WalletView`].

use leptos::prelude::*;

use crate::components::{AccountDetails, ConnectPanel, InstallPrompt, Notice};
use crate::services::WalletView;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectPage(install_url: String) -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <header class="app-header">
            {move || match wallet_ctx.view.get() {
                WalletView::InstallPrompt => {
                    view! { <InstallPrompt install_url=install_url.clone()/> }.into_any()
                }
                WalletView::ConnectControl => view! { <ConnectPanel/> }.into_any(),
                WalletView::ConnectedDetails { short_address } => {
                    view! { <AccountDetails short_address=short_address/> }.into_any()
                }
            }}
            <Notice/>
        </header>
    }
}
