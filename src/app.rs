use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::ValuationForm,
    ui::{
        components::toast::{enqueue, Toast, ToastKind, ToastMessage},
        pages::{ReportPage, SettingsPage, ValuationPage},
        shell::Shell,
    },
    util::{
        assets,
        config::{load_catalog, LoadedCatalog},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Valuation {},
    #[route("/informe")]
    Report {},
    #[route("/ajustes")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let loaded = use_hook(load_catalog);
    let warning = loaded.warning.clone();

    let form = use_signal(|| ValuationForm::new(&loaded.catalog));
    use_context_provider(|| form);

    let catalog = use_signal(|| loaded.clone());
    use_context_provider(|| catalog);

    // A broken catalog file is reported once, as the first notification.
    let toasts = use_signal(move || {
        let mut entries = Vec::<ToastMessage>::new();
        if let Some(warning) = warning {
            enqueue(&mut entries, ToastKind::Warning, warning);
        }
        entries
    });
    use_context_provider(|| toasts);
    use_hook(|| info!("valuation form ready"));

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Valuation() -> Element {
    rsx! { Shell { ValuationPage {} } }
}

#[component]
pub fn Report() -> Element {
    rsx! { Shell { ReportPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
