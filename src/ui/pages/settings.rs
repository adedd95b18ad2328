use dioxus::prelude::*;

use crate::{
    domain::{CategoryKind, ValuationForm},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme::{self, Tone},
    },
    util::{
        config::{catalog_file, load_catalog, CatalogSource, LoadedCatalog, CATALOG_ENV_VAR},
        number::{format_decimal, Locale},
        version::{version_label, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let mut form = use_context::<Signal<ValuationForm>>();
    let mut loaded = use_context::<Signal<LoadedCatalog>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let current = loaded();
    let source_label = match &current.source {
        CatalogSource::BuiltIn => "Márgenes por defecto".to_string(),
        CatalogSource::File(path) => format!("Archivo: {}", path.display()),
    };
    let expected_path = catalog_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(sin directorio de configuración)".to_string());

    let rows = CategoryKind::ALL
        .iter()
        .map(|kind| {
            let defaults = current.catalog.get(*kind);
            (
                kind.emoji(),
                defaults.label.clone(),
                format_decimal(defaults.margin_percent, 2, Locale::EsEs),
                defaults.suppliers.join(", "),
            )
        })
        .collect::<Vec<_>>();

    let on_reload = move |_| {
        let fresh = load_catalog();
        form.with_mut(|st| st.apply_catalog(&fresh.catalog));
        match fresh.warning.clone() {
            Some(warning) => push_toast(toasts, ToastKind::Warning, warning),
            None => push_toast(toasts, ToastKind::Success, "Márgenes recargados."),
        }
        loaded.set(fresh);
    };

    let on_reset = move |_| {
        let catalog = loaded.with(|current| current.catalog.clone());
        form.with_mut(|st| st.reset(&catalog));
        push_toast(toasts, ToastKind::Info, "Formulario restablecido.");
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel(Tone::Light)}",
                div { class: "flex items-center justify-between",
                    h2 { class: "{theme::section_title(Tone::Light)}", "Márgenes por categoría" }
                    button { class: "{theme::btn_soft()}", onclick: on_reload, "↻ Recargar" }
                }
                p { class: "mt-2 text-xs font-bold uppercase tracking-widest text-indigo-400", "{source_label}" }
                div { class: "mt-6 {theme::table_container()}",
                    table {
                        class: "min-w-full {theme::table_divider()} text-sm",
                        thead {
                            class: "{theme::table_header()} text-left tracking-wide",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Categoría" }
                                th { class: "px-4 py-3 font-medium text-right", "Margen" }
                                th { class: "px-4 py-3 font-medium", "Proveedores iniciales" }
                            }
                        }
                        tbody {
                            class: "{theme::table_divider()} text-indigo-900",
                            for (emoji, label, margin, suppliers) in rows {
                                tr {
                                    td { class: "px-4 py-3 font-medium", "{emoji} {label}" }
                                    td { class: "px-4 py-3 text-right", "{margin}%" }
                                    td { class: "px-4 py-3 text-indigo-400", "{suppliers}" }
                                }
                            }
                        }
                    }
                }
                p { class: "mt-4 text-xs text-indigo-400",
                    "Para personalizar los márgenes, crea "
                    code { "{expected_path}" }
                    " o indica otra ruta con la variable "
                    code { "{CATALOG_ENV_VAR}" }
                    "."
                }
            }

            section {
                class: "{theme::panel(Tone::Light)}",
                h2 { class: "{theme::section_title(Tone::Light)}", "Formulario" }
                p { class: "mt-2 text-sm text-indigo-400",
                    "Vuelve a los proveedores iniciales, sin gastos, 25 años de vigencia y 25% de valoración."
                }
                button {
                    class: "mt-4 rounded-2xl border border-rose-200 px-5 py-2.5 text-sm font-bold text-rose-600 hover:bg-rose-50",
                    onclick: on_reset,
                    "Restablecer formulario"
                }
            }

            section {
                class: "flex flex-col items-center gap-1 rounded-2xl border border-indigo-100 bg-white p-6 text-center",
                h2 { class: "text-sm font-black uppercase tracking-widest text-indigo-950", "{APP_NAME}" }
                p { class: "text-xs text-indigo-400", "{version_label()}" }
            }
        }
    }
}
