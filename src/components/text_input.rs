//! Form field adapter wrapping one `<input>` widget.
//!
//! Tracks two independent flags for styling: `focused` follows the focus
//! events directly, `filled` is recomputed only on blur from whether the
//! widget holds a non-empty value. The recognized options are enumerated as
//! typed props; there is no open-ended attribute spreading.

#[cfg(test)]
#[path = "text_input_test.rs"]
mod text_input_test;

use leptos::prelude::*;

use super::form::{FieldRegistration, FormRegistry};

fn is_filled(value: &str) -> bool {
    !value.is_empty()
}

fn container_class(focused: bool, filled: bool, errored: bool) -> String {
    let mut class = String::from("text-input");
    if focused {
        class.push_str(" text-input--focused");
    }
    if filled {
        class.push_str(" text-input--filled");
    }
    if errored {
        class.push_str(" text-input--errored");
    }
    class
}

/// A text input registered with the surrounding form's [`FormRegistry`],
/// with an optional leading icon and external error display.
#[component]
pub fn TextInput(
    /// Field name used for registration and error lookup.
    name: &'static str,
    /// Registry of the surrounding form.
    registry: FormRegistry,
    /// `type` attribute of the underlying input.
    #[prop(default = "text")]
    kind: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Leading icon glyph, if any.
    #[prop(optional, into)]
    icon: Option<&'static str>,
    /// Whether the input is disabled.
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let focused = RwSignal::new(false);
    let filled = RwSignal::new(false);

    // One registration per mounted input; a remount under a new name
    // registers that identity afresh.
    registry.register(FieldRegistration { name: name.to_owned(), value });

    let error = move || registry.error_of(name);

    view! {
        <div class=move || container_class(focused.get(), filled.get(), error().is_some())>
            {icon
                .map(|glyph| {
                    view! {
                        <span class="text-input__icon" aria-hidden="true">
                            {glyph}
                        </span>
                    }
                })}
            <input
                name=name
                type=kind
                placeholder=placeholder
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| {
                    focused.set(false);
                    filled.set(is_filled(&value.get_untracked()));
                }
            />
            <Show when=move || error().is_some()>
                <span class="text-input__error" title=move || error().unwrap_or_default()>
                    "!"
                </span>
            </Show>
        </div>
    }
}
