use dioxus::prelude::*;

use crate::{
    domain::{CategoryKind, FixedExpense, Section, ValuationForm},
    ui::{
        components::{
            line_item_group::LineItemGroup,
            money_field::MoneyField,
            summary_card::SummaryCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
    util::number::{format_decimal, parse_or_zero, Locale},
};

#[component]
pub fn ValuationPage() -> Element {
    let form = use_context::<Signal<ValuationForm>>();

    let snapshot = form();
    let result = snapshot.evaluate();

    rsx! {
        div { class: "grid grid-cols-1 gap-10 lg:grid-cols-12",
            div { class: "space-y-12 lg:col-span-8",
                RevenueSection { form: snapshot.clone() }
                ExpensesSection { form: snapshot.clone() }
                ConcessionSection {
                    years_remaining: snapshot.concession.years_remaining,
                    percentage: snapshot.valuation.percentage,
                    observations: snapshot.concession.observations.clone(),
                }
            }
            div { class: "lg:col-span-4",
                SummaryCard {
                    result,
                    percentage: snapshot.valuation.percentage,
                    years_remaining: snapshot.concession.years_remaining,
                }
            }
        }
    }
}

/// Wires a `LineItemGroup` to one section of the shared form.
#[component]
fn SectionGroup(title: String, icon: &'static str, section: Section, form: ValuationForm) -> Element {
    let mut state = use_context::<Signal<ValuationForm>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let items = form.items(section).to_vec();

    rsx! {
        LineItemGroup {
            title,
            icon,
            items,
            on_add: move |_| {
                state.with_mut(|st| {
                    st.add_item(section);
                });
            },
            on_remove: move |id: String| {
                let removed = state.with_mut(|st| st.remove_item(section, &id));
                if removed {
                    push_toast(toasts, ToastKind::Info, "Concepto eliminado.");
                }
            },
            on_rename: move |(id, name): (String, String)| {
                state.with_mut(|st| {
                    st.rename_item(section, &id, name);
                });
            },
            on_amount: move |(id, amount): (String, f64)| {
                state.with_mut(|st| {
                    st.set_item_amount(section, &id, amount);
                });
            },
        }
    }
}

fn category_title(form: &ValuationForm, kind: CategoryKind) -> String {
    form.category(kind)
        .map(|category| {
            format!(
                "{} ({}%)",
                category.label,
                format_decimal_trimmed(category.margin_percent)
            )
        })
        .unwrap_or_default()
}

/// `8.5` -> `8,5`, `40.0` -> `40`, `1.25` -> `1,25`.
fn format_decimal_trimmed(value: f64) -> String {
    let rendered = format_decimal(value, 2, Locale::EsEs);
    rendered
        .trim_end_matches('0')
        .trim_end_matches(',')
        .to_string()
}

#[component]
fn RevenueSection(form: ValuationForm) -> Element {
    rsx! {
        section {
            div { class: "mb-8 flex items-center gap-3",
                div { class: "h-10 w-1.5 rounded-full bg-indigo-600" }
                h2 { class: "{theme::section_title(Tone::Light)}", "Ventas Anuales" }
            }
            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2",
                for kind in CategoryKind::ALL {
                    SectionGroup {
                        key: "{kind.index()}",
                        title: category_title(&form, kind),
                        icon: kind.emoji(),
                        section: Section::Category(kind),
                        form: form.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ExpensesSection(form: ValuationForm) -> Element {
    let mut state = use_context::<Signal<ValuationForm>>();
    let is_rented = form.rent.is_rented;

    rsx! {
        section {
            class: "{theme::panel(Tone::Light)} space-y-10",
            div { class: "flex items-center gap-3",
                div { class: "rounded-2xl bg-indigo-50 p-3 text-2xl text-indigo-600", "🧾" }
                h2 { class: "{theme::section_title(Tone::Light)}", "Gastos de Explotación" }
            }
            div { class: "grid grid-cols-1 gap-10 md:grid-cols-2",
                div { class: "md:col-span-2",
                    SectionGroup {
                        title: "Gastos de Personal".to_string(),
                        icon: "👥",
                        section: Section::Personnel,
                        form: form.clone(),
                    }
                }
                div { class: "space-y-8",
                    MoneyField {
                        label: "Seguros Sociales".to_string(),
                        icon: "🛡️",
                        value: form.fixed_expenses.social_security,
                        placeholder: "0.00",
                        on_change: move |value: f64| state.with_mut(|st| st.set_fixed_expense(FixedExpense::SocialSecurity, value)),
                    }
                    MoneyField {
                        label: "Canon Anual".to_string(),
                        icon: "🏛️",
                        value: form.fixed_expenses.canon,
                        placeholder: "0.00",
                        on_change: move |value: f64| state.with_mut(|st| st.set_fixed_expense(FixedExpense::Canon, value)),
                    }
                }
                div { class: "space-y-8",
                    MoneyField {
                        label: "Impuestos".to_string(),
                        icon: "🧾",
                        value: form.fixed_expenses.taxes,
                        placeholder: "0.00",
                        on_change: move |value: f64| state.with_mut(|st| st.set_fixed_expense(FixedExpense::Taxes, value)),
                    }
                    div {
                        label { class: "{theme::label_class(Tone::Light)}", span { "🏠" } "Local" }
                        div { class: "flex gap-2 rounded-2xl border border-indigo-100 bg-indigo-50 p-1",
                            button {
                                class: "{theme::btn_toggle(is_rented)}",
                                onclick: move |_| state.with_mut(|st| st.set_rented(true)),
                                "Alquiler"
                            }
                            button {
                                class: "{theme::btn_toggle(!is_rented)}",
                                onclick: move |_| state.with_mut(|st| st.set_rented(false)),
                                "Propiedad"
                            }
                        }
                        if is_rented {
                            div { class: "mt-3",
                                MoneyField {
                                    label: "Alquiler mensual".to_string(),
                                    icon: "📆",
                                    value: form.rent.monthly_price,
                                    placeholder: "Importe mensual",
                                    on_change: move |value: f64| state.with_mut(|st| st.set_monthly_rent(value)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConcessionSection(years_remaining: u32, percentage: f64, observations: String) -> Element {
    let mut state = use_context::<Signal<ValuationForm>>();
    let percentage_display = format_decimal_trimmed(percentage);

    rsx! {
        section {
            class: "{theme::panel(Tone::Dark)}",
            div { class: "relative z-10 mb-10 flex items-center gap-3",
                div { class: "rounded-2xl bg-white/10 p-3 text-2xl", "⚖️" }
                h2 { class: "{theme::section_title(Tone::Dark)}", "Licencia y Valoración 1:1" }
            }
            div { class: "relative z-10 grid grid-cols-1 gap-12 md:grid-cols-2",
                div { class: "space-y-6",
                    div { class: "flex items-center justify-between",
                        label { class: "{theme::label_class(Tone::Dark)}", "Vigencia Restante" }
                        span { class: "text-3xl font-black text-white",
                            "{years_remaining} "
                            small { class: "text-xs", "años" }
                        }
                    }
                    input {
                        class: "concession-slider no-print",
                        r#type: "range",
                        min: "1",
                        max: "100",
                        value: "{years_remaining}",
                        oninput: move |evt: FormEvent| {
                            let years = parse_or_zero(&evt.value()).round() as u32;
                            state.with_mut(|st| st.set_years_remaining(years));
                        },
                    }
                    p { class: "text-[10px] font-bold italic text-indigo-400",
                        "El porcentaje de valoración se ajusta automáticamente al número de años."
                    }
                }
                div { class: "flex flex-col items-center justify-center space-y-4 rounded-3xl border border-white/10 bg-white/5 p-8 text-center",
                    label { class: "{theme::label_class(Tone::Dark)}", "Ratio sobre Ventas" }
                    div { class: "flex items-center justify-center gap-1",
                        input {
                            class: "w-24 border-b-2 border-white/20 bg-transparent text-center text-5xl font-black focus:border-white focus:outline-none",
                            inputmode: "decimal",
                            value: "{percentage_display}",
                            onchange: move |evt: FormEvent| {
                                let value = parse_or_zero(&evt.value());
                                state.with_mut(|st| st.set_valuation_percentage(value));
                            },
                        }
                        span { class: "text-3xl font-black text-indigo-400", "%" }
                    }
                }
            }
            div { class: "relative z-10 mt-10",
                label { class: "{theme::label_class(Tone::Dark)}", "Observaciones" }
                textarea {
                    class: "mt-3 w-full rounded-2xl border border-white/20 bg-white/5 p-4 text-sm text-white focus:border-white focus:outline-none",
                    rows: "3",
                    placeholder: "Condiciones de la concesión, renovaciones, cargas…",
                    value: "{observations}",
                    oninput: move |evt: FormEvent| state.with_mut(|st| st.set_observations(evt.value())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_titles_drop_trailing_zeros() {
        assert_eq!(format_decimal_trimmed(8.5), "8,5");
        assert_eq!(format_decimal_trimmed(40.0), "40");
        assert_eq!(format_decimal_trimmed(1.25), "1,25");
    }

    #[test]
    fn category_titles_include_margin() {
        let form = ValuationForm::default();
        assert_eq!(category_title(&form, CategoryKind::Tobacco), "Tabaco (8,5%)");
        assert_eq!(
            category_title(&form, CategoryKind::TopUps),
            "Recargas (1,25%)"
        );
    }
}
