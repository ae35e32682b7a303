//! Survade - Landing page for the Survade patient-survey platform
//!
//! A marketing page with a waitlist sign-up flow, scroll-driven effects,
//! and a pluggable form submission backend, built with Leptos and
//! WebAssembly.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_greeting();
    leptos::mount::hydrate_body(App);
}

/// Styled console welcome for the curious.
#[cfg(feature = "hydrate")]
fn console_greeting() {
    use leptos::web_sys::console;
    use wasm_bindgen::JsValue;

    console::log_2(
        &JsValue::from_str("%c🚀 Welcome to Survade!"),
        &JsValue::from_str("font-size: 20px; font-weight: bold; color: #667eea;"),
    );
    console::log_2(
        &JsValue::from_str(
            "%cInterested in how this works? We're hiring! Check out our careers page.",
        ),
        &JsValue::from_str("font-size: 12px; color: #888;"),
    );
}
