// =============================================================================
// Talevo Web - Form Components
// =============================================================================
// Table of Contents:
// 1. FilterSelect
// 2. FormField
// 3. FileField
// =============================================================================

use leptos::prelude::*;
use web_sys::HtmlInputElement;

// -----------------------------------------------------------------------------
// 1. FilterSelect
// -----------------------------------------------------------------------------

/// Filter dropdown: a fixed "all" entry (value `""`) followed by `options`.
#[component]
pub fn FilterSelect(
    #[prop(into)] id: String,
    #[prop(into)] all_label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="filter-select"
            on:change=move |e| on_change.run(event_target_value(&e))
        >
            <option value="">{all_label}</option>
            <For
                each=move || options.get()
                key=|opt| opt.clone()
                children=move |opt| {
                    let value = opt.clone();
                    view! { <option value=value>{opt}</option> }
                }
            />
        </select>
    }
}

// -----------------------------------------------------------------------------
// 2. FormField
// -----------------------------------------------------------------------------

/// Labelled, uncontrolled input read back through `FormData`.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let input_id = if id.is_empty() { name.clone() } else { id };

    view! {
        <div class="form-group">
            <label class="form-label" for=input_id.clone()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            {if multiline {
                view! {
                    <textarea
                        id=input_id
                        name=name
                        class="form-textarea"
                        rows="4"
                        placeholder=placeholder
                        required=required
                    ></textarea>
                }.into_any()
            } else {
                view! {
                    <input
                        id=input_id
                        name=name
                        type=input_type
                        class="form-input"
                        placeholder=placeholder
                        required=required
                    />
                }.into_any()
            }}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. FileField
// -----------------------------------------------------------------------------

/// File picker whose label switches to the chosen file name.
#[component]
pub fn FileField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] accept: String,
) -> impl IntoView {
    let chosen = RwSignal::new(Option::<String>::None);
    let input_id = if id.is_empty() { name.clone() } else { id };

    let on_change = move |e: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&e);
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        if name.is_some() {
            chosen.set(name);
        }
    };

    view! {
        <div class="form-group file-upload">
            <input
                id=input_id.clone()
                name=name
                type="file"
                class="file-input"
                accept=accept
                on:change=on_change
            />
            <label for=input_id class="file-label">
                <i class="bi bi-cloud-upload"></i>
                <span
                    id="fileLabel"
                    class:file-chosen=move || chosen.with(Option::is_some)
                >
                    {move || chosen.get().unwrap_or_else(|| label.clone())}
                </span>
            </label>
        </div>
    }
}
