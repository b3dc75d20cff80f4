//! Shown when no Phantom provider was found on the page

use leptos::prelude::*;

#[component]
pub fn InstallPrompt(install_url: String) -> impl IntoView {
    view! {
        <p class="install-prompt">
            "No provider found. Install "
            <a href=install_url target="_blank" rel="noopener noreferrer">
                "Phantom Browser extension"
            </a>
        </p>
    }
}
