use dioxus::prelude::*;

use crate::domain::{CategoryKind, ValuationForm, ValuationResult};
use crate::ui::theme;
use crate::util::number::{format_decimal, format_eur, Locale};

#[derive(Clone, PartialEq)]
pub struct BreakdownRow {
    pub kind: CategoryKind,
    pub label: String,
    pub suppliers: usize,
    pub margin_percent: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Joins the per-category result with the form's margins and supplier counts.
pub fn breakdown_rows(form: &ValuationForm, result: &ValuationResult) -> Vec<BreakdownRow> {
    result
        .categories
        .iter()
        .map(|entry| {
            let category = form.category(entry.kind);
            BreakdownRow {
                kind: entry.kind,
                label: entry.label.clone(),
                suppliers: category.map(|c| c.items.len()).unwrap_or_default(),
                margin_percent: category.map(|c| c.margin_percent).unwrap_or_default(),
                revenue: entry.revenue,
                profit: entry.profit,
            }
        })
        .collect()
}

#[component]
pub fn BreakdownTable(rows: Vec<BreakdownRow>, total_revenue: f64, total_profit: f64) -> Element {
    rsx! {
        div {
            class: "{theme::table_container()}",
            table {
                class: "min-w-full {theme::table_divider()} text-sm",
                thead {
                    class: "{theme::table_header()} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Categoría" }
                        th { class: "px-4 py-3 font-medium text-right", "Conceptos" }
                        th { class: "px-4 py-3 font-medium text-right", "Margen" }
                        th { class: "px-4 py-3 font-medium text-right", "Ventas" }
                        th { class: "px-4 py-3 font-medium text-right", "Margen Bruto" }
                    }
                }
                tbody {
                    class: "{theme::table_divider()}",
                    for row in rows {
                        BreakdownRowView { key: "{row.label}", row }
                    }
                    tr { class: "bg-indigo-50/60 font-bold text-indigo-950",
                        td { class: "px-4 py-3", colspan: "3", "Total" }
                        td { class: "px-4 py-3 text-right", {format_eur(total_revenue, Locale::EsEs)} }
                        td { class: "px-4 py-3 text-right", {format_eur(total_profit, Locale::EsEs)} }
                    }
                }
            }
        }
    }
}

#[component]
fn BreakdownRowView(row: BreakdownRow) -> Element {
    let muted = row.revenue == 0.0;
    let row_class = if muted {
        "text-indigo-300"
    } else {
        "text-indigo-900"
    };
    let margin = format_decimal(row.margin_percent, 2, Locale::EsEs);
    rsx! {
        tr {
            class: "{row_class}",
            td { class: "px-4 py-3 font-medium", "{row.kind.emoji()} {row.label}" }
            td { class: "px-4 py-3 text-right", "{row.suppliers}" }
            td { class: "px-4 py-3 text-right", "{margin}%" }
            td { class: "px-4 py-3 text-right", {format_eur(row.revenue, Locale::EsEs)} }
            td { class: "px-4 py-3 text-right", {format_eur(row.profit, Locale::EsEs)} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;

    #[test]
    fn rows_carry_margin_and_supplier_count() {
        let mut form = ValuationForm::default();
        let section = Section::Category(CategoryKind::Food);
        let id = form.items(section)[0].id.clone();
        form.set_item_amount(section, &id, 1000.0);
        form.add_item(section);

        let rows = breakdown_rows(&form, &form.evaluate());
        assert_eq!(rows.len(), 6);
        let food = rows.iter().find(|row| row.kind == CategoryKind::Food).unwrap();
        assert_eq!(food.suppliers, 3);
        assert_eq!(food.margin_percent, 30.0);
        assert_eq!(food.revenue, 1000.0);
        assert_eq!(food.profit, 300.0);
    }
}
