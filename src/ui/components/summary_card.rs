use dioxus::prelude::*;

use super::{
    payback_indicator::PaybackIndicator, proportion_chart::ProportionChart,
};
use crate::domain::{chart_slices, payback_assessment, ValuationResult};
use crate::util::number::{format_decimal, format_eur, Locale};

/// Right-hand column: valuation, profit cascade, payback and chart.
#[component]
pub fn SummaryCard(result: ValuationResult, percentage: f64, years_remaining: u32) -> Element {
    let money = |value: f64| format_eur(value, Locale::EsEs);
    let valuation = money(result.estimated_valuation);
    let revenue = money(result.total_revenue);
    let gross = money(result.total_gross_profit);
    let expenses = money(result.total_expenses);
    let net = money(result.total_net_profit);
    let percentage_display = format_decimal(percentage, 0, Locale::EsEs);
    let payback_short = format_decimal(result.payback_years, 1, Locale::EsEs);
    let assessment = payback_assessment(&result);
    let slices = chart_slices(&result);

    rsx! {
        div { class: "sticky top-24 space-y-6",
            div {
                class: "relative overflow-hidden rounded-2xl bg-slate-900 p-8 text-white shadow-xl print-break-avoid",
                p { class: "mb-1 text-sm font-medium text-slate-400", "Valoración Estimada del Traspaso" }
                h2 { class: "mb-8 text-4xl font-bold tracking-tight text-emerald-400", "{valuation}" }

                div { class: "space-y-4 border-t border-slate-800 pt-6",
                    div { class: "flex items-end justify-between",
                        div {
                            p { class: "mb-1 text-xs text-slate-400", "📊 Facturación Anual" }
                            p { class: "text-lg font-semibold text-slate-200", "{revenue}" }
                        }
                        div { class: "text-right",
                            p { class: "mb-1 text-xs text-slate-400", "📅 Vigencia" }
                            p { class: "text-lg font-semibold", "{years_remaining} años" }
                        }
                    }

                    div { class: "rounded-xl border border-slate-700 bg-slate-800/50 p-4",
                        p { class: "mb-2 text-[10px] font-bold uppercase tracking-wider text-slate-400",
                            "Base: {percentage_display}% facturación"
                        }
                        div { class: "mb-1 flex justify-between text-sm",
                            span { class: "text-slate-300", "Margen Bruto (Comisiones):" }
                            span { class: "font-medium text-slate-100", "{gross}" }
                        }
                        div { class: "mb-3 flex justify-between text-sm text-red-400",
                            span { "Gastos de Explotación:" }
                            span { "- {expenses}" }
                        }
                        div { class: "flex justify-between border-t border-slate-700 pt-3 text-base font-bold text-emerald-400",
                            span { "Beneficio Neto Real:" }
                            span { "{net}" }
                        }
                    }

                    PaybackIndicator { years: result.payback_years, assessment }
                }
            }

            div { class: "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm print-break-avoid",
                h3 { class: "mb-4 text-lg font-bold text-slate-800", "Composición del Margen Bruto" }
                ProportionChart { slices }
            }

            div { class: "rounded-2xl border border-blue-100 bg-blue-50 p-6 print-break-avoid",
                h4 { class: "mb-2 text-sm font-semibold text-blue-900", "Análisis de Rentabilidad" }
                p { class: "text-xs leading-relaxed text-blue-700",
                    "La valoración calculada ({valuation}) representa recuperar la inversión en aproximadamente "
                    strong { "{payback_short} años" }
                    " de beneficio neto real. Un valor entre 3 y 5 años se considera estándar para este tipo de negocios, dependiendo del riesgo y ubicación."
                }
            }
        }
    }
}
