//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-content">
                // Error code
                <h1 class="not-found-code">"404"</h1>

                // Title
                <h2 class="not-found-title">"Page Not Found"</h2>

                // Description
                <p class="not-found-copy">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="cta-button">
                    "Back to Survade"
                </A>
            </div>

            <div class="not-found-footer">
                <p>"© 2026 Survade"</p>
            </div>
        </div>
    }
}
