use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, tone: Tone) -> Element {
    let (panel, value_class) = match tone {
        Tone::Light => (
            "rounded-2xl border border-indigo-100 bg-white p-4 shadow-sm",
            "text-indigo-950",
        ),
        Tone::Dark => (
            "rounded-xl border border-slate-700 bg-slate-800/50 p-4",
            "text-slate-100",
        ),
    };

    rsx! {
        div {
            class: "{panel}",
            h3 { class: "{theme::label_class(tone)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(tone)}", "{desc}" }
            }
        }
    }
}
