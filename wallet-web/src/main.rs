//! Phantom Connect
//!
//! Browser helper that detects the Phantom wallet extension, connects to it
//! and shows the connected account.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use config::AppConfig;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = AppConfig::from_query();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    for warning in config.warnings() {
        log::warn!("Config: {}", warning);
    }
    log::info!("Phantom connect starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

/// Remove the page shell's loading placeholder, if it has one
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(loading_element) => {
            loading_element.remove();
            log::debug!("Loading screen removed");
        }
        None => log::debug!("No '{}' element to remove", LOADING_ELEMENT_ID),
    }
}
