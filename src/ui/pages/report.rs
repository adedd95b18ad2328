use dioxus::prelude::*;
use time::{macros::format_description, OffsetDateTime};

use crate::{
    domain::{chart_slices, payback_assessment, ValuationForm},
    ui::{
        components::{
            breakdown_table::{breakdown_rows, BreakdownTable},
            kpi_card::KpiCard,
            payback_indicator::PaybackIndicator,
            proportion_chart::ProportionChart,
        },
        export::print_page,
        theme::{self, Tone},
    },
    util::number::{format_decimal, format_eur, Locale},
};

/// Current local date as `dd/mm/yyyy`, UTC when the offset is unknown.
pub fn report_date() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_default()
}

#[component]
pub fn ReportPage() -> Element {
    let form = use_context::<Signal<ValuationForm>>();
    let snapshot = form();
    let result = snapshot.evaluate();

    let rows = breakdown_rows(&snapshot, &result);
    let slices = chart_slices(&result);
    let assessment = payback_assessment(&result);
    let money = |value: f64| format_eur(value, Locale::EsEs);
    let annual_rent = money(snapshot.rent.annual_cost());
    let personnel = money(snapshot.personnel.iter().map(|item| item.amount).sum());
    let rent_mode = if snapshot.rent.is_rented {
        "Alquiler"
    } else {
        "Propiedad"
    };
    let percentage = format_decimal(snapshot.valuation.percentage, 0, Locale::EsEs);
    let observations = snapshot.concession.observations.trim().to_string();
    let date = report_date();

    rsx! {
        div { class: "space-y-10",
            div { class: "flex items-end justify-between",
                div {
                    h2 { class: "{theme::section_title(Tone::Light)}", "Informe de Valoración" }
                    p { class: "mt-1 text-xs font-bold uppercase tracking-widest text-indigo-400", "Fecha: {date}" }
                }
                button {
                    class: "{theme::btn_primary()} no-print",
                    onclick: move |_| print_page(),
                    "🖨️ Imprimir / PDF"
                }
            }

            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Valoración Estimada".to_string(),
                    value: money(result.estimated_valuation),
                    description: Some(format!("{percentage}% de la facturación anual")),
                    tone: Tone::Light,
                }
                KpiCard {
                    title: "Facturación Anual".to_string(),
                    value: money(result.total_revenue),
                    description: None,
                    tone: Tone::Light,
                }
                KpiCard {
                    title: "Beneficio Neto Real".to_string(),
                    value: money(result.total_net_profit),
                    description: Some(format!("Margen bruto {}", money(result.total_gross_profit))),
                    tone: Tone::Light,
                }
            }

            section { class: "print-break-avoid",
                h3 { class: "mb-4 text-sm font-bold uppercase tracking-wide text-indigo-900", "Ventas y margen por categoría" }
                BreakdownTable {
                    rows,
                    total_revenue: result.total_revenue,
                    total_profit: result.total_gross_profit,
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                div { class: "{theme::card()} print-break-avoid",
                    h3 { class: "mb-4 text-sm font-bold uppercase tracking-wide text-indigo-900", "Gastos de Explotación" }
                    dl { class: "space-y-2 text-sm text-indigo-900",
                        ExpenseLine { label: "Personal".to_string(), value: personnel }
                        ExpenseLine { label: "Seguros Sociales".to_string(), value: money(snapshot.fixed_expenses.social_security) }
                        ExpenseLine { label: "Impuestos".to_string(), value: money(snapshot.fixed_expenses.taxes) }
                        ExpenseLine { label: "Canon Anual".to_string(), value: money(snapshot.fixed_expenses.canon) }
                        ExpenseLine { label: format!("Local ({rent_mode})"), value: annual_rent }
                        div { class: "flex justify-between border-t border-indigo-100 pt-2 font-bold",
                            dt { "Total" }
                            dd { {money(result.total_expenses)} }
                        }
                    }
                }
                div { class: "{theme::card()} print-break-avoid",
                    h3 { class: "mb-4 text-sm font-bold uppercase tracking-wide text-indigo-900", "Composición del Margen Bruto" }
                    ProportionChart { slices }
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                div { class: "rounded-2xl bg-slate-900 p-6 print-break-avoid",
                    PaybackIndicator { years: result.payback_years, assessment }
                }
                div { class: "{theme::card()} print-break-avoid",
                    h3 { class: "mb-2 text-sm font-bold uppercase tracking-wide text-indigo-900", "Concesión" }
                    p { class: "text-sm text-indigo-900", "Vigencia restante: {snapshot.concession.years_remaining} años" }
                    if observations.is_empty() {
                        p { class: "mt-2 text-xs italic text-indigo-300", "Sin observaciones." }
                    } else {
                        p { class: "mt-2 whitespace-pre-line text-sm text-indigo-700", "{observations}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ExpenseLine(label: String, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between",
            dt { class: "text-indigo-400", "{label}" }
            dd { "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::report_date;

    #[test]
    fn report_date_is_day_month_year() {
        let date = report_date();
        let parts: Vec<&str> = date.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }
}
