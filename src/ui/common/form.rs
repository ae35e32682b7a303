use leptos::prelude::*;

/// Labelled text input for the waitlist form
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Element id, shared with the label's `for`
    id: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    #[prop(into)]
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="form-label">{label}</label>
            <input
                type=input_type
                id=id
                name=id
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled select drawn from a fixed option set
#[component]
pub fn SelectField(
    /// Field label text
    label: &'static str,
    /// Element id, shared with the label's `for`
    id: &'static str,
    /// The selectable options
    options: &'static [&'static str],
    /// Disabled prompt shown while nothing is selected
    #[prop(default = "Select...")]
    prompt: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="form-label">{label}</label>
            <select
                id=id
                name=id
                class="form-input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled selected=move || value.get().is_empty()>
                    {prompt}
                </option>
                {options
                    .iter()
                    .map(|option| {
                        view! { <option value=*option>{*option}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
