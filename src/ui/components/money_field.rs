use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};
use crate::util::number::parse_or_zero;

/// Renders a stored amount for editing; zero shows as an empty field.
pub fn editable_amount(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Picks what an amount input shows: the user's own text while it still parses
/// to the stored value, the stored value otherwise (e.g. after a reset).
pub fn shown_text(text: &str, value: f64) -> String {
    if parse_or_zero(text) == value {
        text.to_string()
    } else {
        editable_amount(value)
    }
}

#[component]
pub fn MoneyField(
    label: String,
    icon: &'static str,
    value: f64,
    placeholder: &'static str,
    on_change: EventHandler<f64>,
    #[props(default)] tone: Tone,
) -> Element {
    let mut text = use_signal(|| editable_amount(value));
    let shown = shown_text(&text.read(), value);

    rsx! {
        div {
            label { class: "{theme::label_class(tone)}",
                span { "{icon}" }
                "{label}"
            }
            div { class: "relative",
                input {
                    class: "{theme::input_class(tone)}",
                    inputmode: "decimal",
                    value: "{shown}",
                    placeholder: "{placeholder}",
                    oninput: move |evt: FormEvent| {
                        let raw = evt.value();
                        on_change.call(parse_or_zero(&raw));
                        text.set(raw);
                    },
                }
                span { class: "{theme::currency_prefix(tone)}", "€" }
            }
        }
    }
}
