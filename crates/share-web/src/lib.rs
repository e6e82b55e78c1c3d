//! Leptos share button that shows up only where the platform has a native
//! share sheet, plus the small SSR site that demonstrates it.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod share;

pub use components::{IconShare, ShareButton};
pub use share::{
    Availability, ShareCapability, ShareController, ShareData, ShareError, ShareProvider, provide_share_capability,
};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
