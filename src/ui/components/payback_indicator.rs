use dioxus::prelude::*;

use crate::domain::PaybackAssessment;
use crate::util::number::{format_decimal, Locale};

#[component]
pub fn PaybackIndicator(years: f64, assessment: PaybackAssessment) -> Element {
    let badge = match assessment {
        PaybackAssessment::NoProfit => "border-slate-500/40 bg-slate-500/10 text-slate-300",
        PaybackAssessment::Fast => "border-sky-500/40 bg-sky-500/10 text-sky-200",
        PaybackAssessment::Standard => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        PaybackAssessment::Slow => "border-amber-500/40 bg-amber-500/10 text-amber-200",
    };
    let years_display = if years > 0.0 {
        format_decimal(years, 2, Locale::EsEs)
    } else {
        "0,00".to_string()
    };

    rsx! {
        div {
            class: "flex items-center justify-between rounded-xl border border-emerald-800/50 bg-emerald-900/30 p-4",
            div { class: "flex flex-col gap-1",
                span { class: "text-xs font-medium uppercase tracking-wide text-emerald-100", "Equivalencia en Beneficios" }
                span {
                    class: "inline-flex w-fit items-center rounded-full border px-2 py-0.5 text-[10px] font-semibold uppercase {badge}",
                    "{assessment.label()}"
                }
            }
            div { class: "text-right",
                span { class: "text-xl font-bold text-emerald-400", "{years_display}" }
                span { class: "ml-1 text-[10px] text-emerald-300", "AÑOS" }
            }
        }
    }
}
