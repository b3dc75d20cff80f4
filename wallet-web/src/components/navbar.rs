//! Navigation Bar Component

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <span class="nav-title">"Phantom Connect"</span>
            </div>
        </nav>
    }
}
