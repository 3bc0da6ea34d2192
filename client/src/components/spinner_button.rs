//! Submit button that swaps its label for a spinner while a request runs.

#[cfg(test)]
#[path = "spinner_button_test.rs"]
mod spinner_button_test;

use leptos::prelude::*;

/// Presentation options of a `SpinnerButton`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinnerButtonOptions {
    /// Request in flight: show the spinner and disable the button.
    pub active: bool,
    /// Spinner diameter in pixels.
    pub spinner_size: u16,
    pub raised: bool,
    pub full_width: bool,
}

impl Default for SpinnerButtonOptions {
    fn default() -> Self {
        Self { active: false, spinner_size: 18, raised: true, full_width: false }
    }
}

/// CSS classes for the button element.
pub fn button_classes(options: &SpinnerButtonOptions) -> String {
    let mut classes = vec!["spinner-button"];
    if options.raised {
        classes.push("spinner-button--raised");
    }
    if options.full_width {
        classes.push("spinner-button--full");
    }
    if options.active {
        classes.push("spinner-button--active");
    }
    classes.join(" ")
}

/// Inline size of the spinner element.
pub fn spinner_style(size: u16) -> String {
    format!("width: {size}px; height: {size}px;")
}

#[component]
pub fn SpinnerButton(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] loading_label: Signal<String>,
    #[prop(into)] options: Signal<SpinnerButtonOptions>,
) -> impl IntoView {
    let active = move || options.with(|o| o.active);

    view! {
        <button type="submit" class=move || options.with(button_classes) disabled=active>
            <Show when=active fallback=move || label.get()>
                <span class="spinner-button__spinner" style=move || spinner_style(options.with(|o| o.spinner_size))></span>
                <span class="spinner-button__label">{move || loading_label.get()}</span>
            </Show>
        </button>
    }
}
