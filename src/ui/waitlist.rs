//! Waitlist form component
//!
//! Bridges the core form controller to Leptos: one signal holds the
//! controller, field signals hold the raw input, and the submit handler
//! walks the controller through its state machine around a single await
//! point on the submission backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::analytics;
use crate::core::submit::submit_entry;
use crate::core::waitlist::{
    ErrorBanner, FormPhase, LocalStorageStore, RawSignup, SPECIALTIES, SUBMIT_FAILED_MSG,
    WaitlistController,
};
use crate::ui::common::{ErrorMessage, FormField, SelectField};

/// Waitlist sign-up form with its sibling success panel
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let controller = RwSignal::new(WaitlistController::new(LocalStorageStore));
    let banner = RwSignal::new(ErrorBanner::default());

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());

    let phase = Memo::new(move |_| controller.with(|c| c.phase()));
    let error = Signal::derive(move || banner.with(|b| b.message().map(str::to_owned)));

    // A prior join renders the success panel directly. Runs client-side
    // after hydration so the server markup and first client render agree.
    Effect::new(move |_| {
        controller.update(|c| c.restore());
    });

    // Show an inline error and schedule its auto-dismiss. The banner token
    // keeps a stale dismiss from clearing a superseding error.
    let show_error = move |message: String| {
        let _token = banner
            .try_update(|b| b.show(message))
            .unwrap_or_default();
        #[cfg(not(feature = "ssr"))]
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::core::waitlist::ERROR_DISMISS_MS).await;
            banner.update(|b| b.dismiss(_token));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = RawSignup {
            name: name.get(),
            email: email.get(),
            specialty: specialty.get(),
        };

        // None: a submission is already in flight, or the user has joined.
        // The disabled button makes this unreachable in practice.
        let Some(outcome) = controller.try_update(|c| c.begin_submit(&input)).flatten() else {
            return;
        };

        match outcome {
            Err(err) => show_error(err.to_string()),
            Ok(record) => {
                spawn_local(async move {
                    match submit_entry(&record).await {
                        Ok(()) => {
                            controller.try_update(|c| c.complete_submit(Ok(())));
                            // Fire-and-forget conversion ping; its failure
                            // cannot touch the success state
                            analytics::track_signup(&record.specialty);
                        }
                        Err(err) => {
                            leptos::logging::error!("waitlist submission failed: {err}");
                            controller.try_update(|c| c.complete_submit(Err(err)));
                            show_error(SUBMIT_FAILED_MSG.to_string());
                        }
                    }
                });
            }
        }
    };

    view! {
        <div class="waitlist-widget">
            <Show when=move || phase.get() != FormPhase::Success>
                <form class="waitlist-form" on:submit=on_submit>
                    <ErrorMessage error=error />

                    <FormField
                        label="Full name"
                        id="name"
                        placeholder="Dr. Jane Smith"
                        value=name
                        on_input=move |v| name.set(v)
                    />
                    <FormField
                        label="Work email"
                        id="email"
                        input_type="email"
                        placeholder="you@clinic.com"
                        value=email
                        on_input=move |v| email.set(v)
                    />
                    <SelectField
                        label="Specialty"
                        id="specialty"
                        options=SPECIALTIES
                        prompt="Select your specialty"
                        value=specialty
                        on_change=move |v| specialty.set(v)
                    />

                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || phase.get() == FormPhase::Submitting
                    >
                        {move || {
                            if phase.get() == FormPhase::Submitting {
                                view! {
                                    <span class="submit-busy">
                                        <Spinner />
                                        "Joining..."
                                    </span>
                                }
                                    .into_any()
                            } else {
                                view! { <span>"Join the Waitlist"</span> }.into_any()
                            }
                        }}
                    </button>
                </form>
            </Show>

            <Show when=move || phase.get() == FormPhase::Success>
                <SuccessPanel />
            </Show>
        </div>
    }
}

/// Persistent panel shown once the user has joined
#[component]
fn SuccessPanel() -> impl IntoView {
    view! {
        <div class="success-message" role="status">
            <svg class="success-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
            </svg>
            <h3>"You're on the list!"</h3>
            <p>
                "Thanks for joining the Survade waitlist. We'll email you as "
                "soon as early access opens for your specialty."
            </p>
        </div>
    }
}

/// Inline spinner for the busy submit button
#[component]
fn Spinner() -> impl IntoView {
    view! {
        <svg class="spinner" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
            <path
                class="spinner-head"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
            />
        </svg>
    }
}
