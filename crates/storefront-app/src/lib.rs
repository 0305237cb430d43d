//! Client-rendered storefront UI.
//!
//! Binds the catalog query pipeline and the mock session layer to a
//! Leptos component tree. All derived state is recomputed from the
//! catalog store and the current query parameters; views subscribe to a
//! single session context instead of polling.

pub mod app;
pub mod components;
pub mod context;
pub mod pages;

pub use app::App;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
