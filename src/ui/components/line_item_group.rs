use dioxus::prelude::*;

use super::money_field::{editable_amount, shown_text};
use crate::domain::LineItem;
use crate::ui::theme;
use crate::util::number::parse_or_zero;

/// Card listing the suppliers/concepts of one section with add and remove.
#[component]
pub fn LineItemGroup(
    title: String,
    icon: &'static str,
    items: Vec<LineItem>,
    on_add: EventHandler<()>,
    on_remove: EventHandler<String>,
    on_rename: EventHandler<(String, String)>,
    on_amount: EventHandler<(String, f64)>,
) -> Element {
    let is_empty = items.is_empty();

    rsx! {
        div {
            class: "{theme::card()} print-break-avoid",
            div { class: "mb-5 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "rounded-lg bg-indigo-50 p-2 text-indigo-600", "{icon}" }
                    h3 { class: "text-sm font-bold uppercase tracking-wide text-indigo-900", "{title}" }
                }
                button {
                    class: "{theme::btn_icon()} no-print",
                    title: "Agregar concepto",
                    onclick: move |_| on_add.call(()),
                    "＋"
                }
            }
            div { class: "space-y-3",
                for item in items {
                    LineItemRow {
                        key: "{item.id}",
                        item: item.clone(),
                        on_remove,
                        on_rename,
                        on_amount,
                    }
                }
                if is_empty {
                    p { class: "py-2 text-center text-xs italic text-indigo-300", "No hay conceptos registrados." }
                }
            }
        }
    }
}

#[component]
fn LineItemRow(
    item: LineItem,
    on_remove: EventHandler<String>,
    on_rename: EventHandler<(String, String)>,
    on_amount: EventHandler<(String, f64)>,
) -> Element {
    let mut amount_text = use_signal(|| editable_amount(item.amount));
    let shown = shown_text(&amount_text.read(), item.amount);
    let id_for_name = item.id.clone();
    let id_for_amount = item.id.clone();
    let id_for_remove = item.id.clone();

    rsx! {
        div { class: "flex items-center gap-2",
            input {
                class: "{theme::input_small()}",
                r#type: "text",
                value: "{item.name}",
                placeholder: "Proveedor / Concepto",
                oninput: move |evt: FormEvent| on_rename.call((id_for_name.clone(), evt.value())),
            }
            div { class: "relative w-32",
                input {
                    class: "{theme::input_amount()}",
                    inputmode: "decimal",
                    value: "{shown}",
                    placeholder: "0",
                    oninput: move |evt: FormEvent| {
                        let raw = evt.value();
                        on_amount.call((id_for_amount.clone(), parse_or_zero(&raw)));
                        amount_text.set(raw);
                    },
                }
                span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-xs font-bold text-indigo-400", "€" }
            }
            button {
                class: "no-print p-2.5 text-indigo-200 transition-colors hover:text-red-500",
                title: "Eliminar",
                onclick: move |_| on_remove.call(id_for_remove.clone()),
                "✕"
            }
        }
    }
}
