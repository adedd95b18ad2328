use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::app::Route;
use crate::ui::{export::print_page, theme};
use crate::util::version::{APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        div { class: "min-h-screen bg-[#F8FAFC] pb-20 font-sans text-slate-900",
            header {
                class: "sticky top-0 z-50 border-b border-indigo-100 bg-white/80 px-6 py-4 backdrop-blur-md",
                div { class: "mx-auto flex max-w-7xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        div { class: "rounded-2xl bg-indigo-600 p-2.5 text-xl text-white shadow-lg shadow-indigo-200", "🏪" }
                        div {
                            h1 { class: "text-xl font-black leading-none tracking-tight text-indigo-950", "{APP_NAME}" }
                            p { class: "mt-1 text-[10px] font-bold uppercase tracking-widest text-indigo-400", "{APP_TAGLINE}" }
                        }
                    }

                    nav { class: "no-print flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Valuation {}),
                            onclick: move |_| { nav.push(Route::Valuation {}); },
                            label: "🧮 Valoración",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Report {}),
                            onclick: move |_| { nav.push(Route::Report {}); },
                            label: "📄 Informe",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                        }
                    }

                    button {
                        class: "{theme::btn_primary()} no-print",
                        onclick: move |_| print_page(),
                        "📥 Exportar PDF"
                    }
                }
            }
            main { class: "mx-auto max-w-7xl px-4 py-10",
                {children}
            }
            footer { class: "mx-auto mt-12 max-w-7xl border-t border-indigo-50 px-4 pt-12 text-center",
                p { class: "text-[10px] font-black uppercase tracking-[0.4em] text-indigo-200",
                    "© {year} {APP_NAME} Professional Edition"
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
