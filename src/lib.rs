#![recursion_limit = "256"]
// lib.rs - Root module for the product_manager library
//
// The whole application lives under web_app; this crate builds both the
// server binary (ssr feature) and the WASM hydration bundle (hydrate
// feature) from the same tree.

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point for client-side hydration.
        #[wasm_bindgen]
        pub fn hydrate() {
            use crate::web_app::App;

            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(App);
        }
    }
}
