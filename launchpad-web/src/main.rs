//! MemeForge launchpad front end
//!
//! Client-side rendered Leptos app. Everything here is glue between the
//! injected wallet provider, the launchpad contract, and the indexer.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages and logging go to the browser console.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("MemeForge launchpad starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element from index.html once the WASM bundle
/// has taken over.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(loading) = document.get_element_by_id("app-loading") {
        if loading.set_attribute("style", "display: none;").is_err() {
            log::warn!("could not hide the loading screen");
        }
    }
}
