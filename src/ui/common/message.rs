//! Reusable message components for inline form feedback

use leptos::prelude::*;

/// Inline error message, rendered above the form while a validation or
/// submission error is current
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="form-error" role="alert">
                <svg class="message-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                          d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
