//! Phantom Connect - Leptos Frontend

use leptos::prelude::*;

use crate::components::Navbar;
use crate::config::AppConfig;
use crate::pages::ConnectPage;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_wallet_context(&config);

    view! {
        <div class="app-container">
            <Navbar/>
            <ConnectPage install_url=config.install_url/>
        </div>
    }
}
