//! Optional analytics boundary.
//!
//! If the host page defines a global `gtag` function, successful signups
//! are reported through it. Its absence is not an error, and a throwing
//! call must never affect the success state already rendered, so every
//! outcome here is ignored.

/// Event name sent on a successful waitlist signup.
pub const SIGNUP_EVENT: &str = "waitlist_signup";

/// Event category attached to the signup event.
pub const SIGNUP_CATEGORY: &str = "engagement";

/// Fire-and-forget conversion ping, labelled with the chosen specialty.
pub fn track_signup(specialty: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        use js_sys::{Function, Object, Reflect};
        use leptos::web_sys;
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Ok(gtag) = gtag.dyn_into::<Function>() else {
            return;
        };

        let params = Object::new();
        let _ = Reflect::set(
            &params,
            &JsValue::from_str("event_category"),
            &JsValue::from_str(SIGNUP_CATEGORY),
        );
        let _ = Reflect::set(
            &params,
            &JsValue::from_str("event_label"),
            &JsValue::from_str(specialty),
        );
        let _ = gtag.call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str("event"),
            &JsValue::from_str(SIGNUP_EVENT),
            &params,
        );
    }
    #[cfg(feature = "ssr")]
    {
        let _ = specialty;
    }
}
