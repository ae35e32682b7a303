//! Scroll-driven page effects.
//!
//! A single window scroll listener feeds a reactive scroll position; the
//! navbar shadow and the hero parallax both derive from that one signal
//! instead of registering their own listeners against module globals.
//! Smooth in-page navigation lives here too.

use leptos::prelude::*;

/// Install the page's scroll listener and return the reactive scroll
/// position. Call once from the page component; effects derive from the
/// returned signal.
pub fn provide_scroll_position() -> ReadSignal<f64> {
    let (scroll_y, _set_scroll_y) = signal(0.0);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            let handler = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    _set_scroll_y.set(window.scroll_y().unwrap_or(0.0));
                }
            });
            let _ = window
                .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());

            // Leak the closure to keep it alive for the page lifetime
            handler.forget();
        });
    }

    scroll_y
}

/// Smoothly scroll to an in-page section, compensating for the fixed
/// navbar height.
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys::{self, ScrollBehavior, ScrollToOptions};
        use wasm_bindgen::JsCast;

        use crate::core::effects::anchor_scroll_top;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(anchor_scroll_top(target.offset_top() as f64));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
