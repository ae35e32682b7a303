//! Call-to-action button with the ripple micro-interaction.
//!
//! The ripple is owned by the button component itself rather than wired up
//! through a page-wide selector sweep: entering the button spawns a
//! short-lived span at the pointer position, removed once its animation
//! finishes.

use leptos::prelude::*;

/// A primary call-to-action button
#[component]
pub fn CtaButton(
    /// Extra classes on top of the `cta-button` base
    #[prop(default = "")]
    class: &'static str,
    /// Click callback
    #[prop(optional, into)]
    on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "cta-button".to_string()
    } else {
        format!("cta-button {class}")
    };

    view! {
        <button
            class=class
            on:mouseenter=|ev| spawn_ripple(&ev)
            on:click=move |_| {
                if let Some(callback) = on_press.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Append a ripple span at the pointer position and remove it once its
/// animation has played out.
fn spawn_ripple(ev: &leptos::ev::MouseEvent) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;
        use leptos::web_sys;
        use wasm_bindgen::JsCast;

        use crate::core::effects::{RIPPLE_LIFETIME_MS, ripple_origin};

        let Some(target) = ev.current_target() else {
            return;
        };
        let Ok(button) = target.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(ripple) = document.create_element("span") else {
            return;
        };

        let (x, y) = ripple_origin(
            ev.page_x() as f64,
            ev.page_y() as f64,
            button.offset_left() as f64,
            button.offset_top() as f64,
        );
        let style = format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
             width: 10px; height: 10px; left: {x}px; top: {y}px; \
             transform: translate(-50%, -50%) scale(0); \
             animation: ripple {RIPPLE_LIFETIME_MS}ms ease-out; pointer-events: none;"
        );
        let _ = ripple.set_attribute("style", &style);
        if button.append_child(&ripple).is_err() {
            return;
        }

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(RIPPLE_LIFETIME_MS).await;
            ripple.remove();
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ev;
    }
}
