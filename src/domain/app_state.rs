use tracing::debug;

use super::{
    catalog::Catalog,
    entities::{
        Category, CategoryKind, ConcessionState, FixedExpense, FixedExpenses, LineItem,
        RentState, ValuationResult, ValuationSettings,
    },
    valuation::compute,
};
use crate::util::generate_id;

pub const DEFAULT_YEARS_REMAINING: u32 = 25;
pub const MIN_PERCENTAGE: f64 = 1.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Addresses an editable list of line items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Category(CategoryKind),
    Personnel,
}

/// Everything the user can edit on the valuation page.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationForm {
    /// Always holds the six categories in `CategoryKind::ALL` order.
    pub categories: Vec<Category>,
    pub personnel: Vec<LineItem>,
    pub fixed_expenses: FixedExpenses,
    pub rent: RentState,
    pub concession: ConcessionState,
    pub valuation: ValuationSettings,
}

impl Default for ValuationForm {
    fn default() -> Self {
        Self::new(&Catalog::default())
    }
}

impl ValuationForm {
    pub fn new(catalog: &Catalog) -> Self {
        let categories = CategoryKind::ALL
            .iter()
            .map(|kind| {
                let defaults = catalog.get(*kind);
                Category {
                    kind: *kind,
                    label: defaults.label.clone(),
                    items: defaults
                        .suppliers
                        .iter()
                        .map(|name| LineItem::new(generate_id("item"), name.clone(), 0.0))
                        .collect(),
                    margin_percent: defaults.margin_percent,
                }
            })
            .collect();

        Self {
            categories,
            personnel: Vec::new(),
            fixed_expenses: FixedExpenses::default(),
            rent: RentState::default(),
            concession: ConcessionState {
                years_remaining: DEFAULT_YEARS_REMAINING,
                observations: String::new(),
            },
            valuation: ValuationSettings {
                percentage: DEFAULT_YEARS_REMAINING as f64,
            },
        }
    }

    pub fn reset(&mut self, catalog: &Catalog) {
        debug!("resetting valuation form");
        *self = Self::new(catalog);
    }

    /// Takes labels and margins from a (re)loaded catalog, keeping the entered items.
    pub fn apply_catalog(&mut self, catalog: &Catalog) {
        for category in &mut self.categories {
            let defaults = catalog.get(category.kind);
            category.label = defaults.label.clone();
            category.margin_percent = defaults.margin_percent;
        }
        debug!("applied catalog margins");
    }

    /// Runs the valuation over the current inputs.
    pub fn evaluate(&self) -> ValuationResult {
        compute(
            &self.categories,
            &self.personnel,
            &self.fixed_expenses,
            &self.rent,
            self.valuation.percentage,
        )
    }

    pub fn category(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories.iter().find(|category| category.kind == kind)
    }

    pub fn items(&self, section: Section) -> &[LineItem] {
        match section {
            Section::Category(kind) => self
                .category(kind)
                .map(|category| category.items.as_slice())
                .unwrap_or(&[]),
            Section::Personnel => &self.personnel,
        }
    }

    fn items_mut(&mut self, section: Section) -> Option<&mut Vec<LineItem>> {
        match section {
            Section::Category(kind) => self
                .categories
                .iter_mut()
                .find(|category| category.kind == kind)
                .map(|category| &mut category.items),
            Section::Personnel => Some(&mut self.personnel),
        }
    }

    /// Appends an empty row and returns its id.
    pub fn add_item(&mut self, section: Section) -> Option<String> {
        let items = self.items_mut(section)?;
        let id = generate_id("item");
        items.push(LineItem::new(id.clone(), "", 0.0));
        debug!(?section, id = %id, "added line item");
        Some(id)
    }

    pub fn remove_item(&mut self, section: Section, id: &str) -> bool {
        let Some(items) = self.items_mut(section) else {
            return false;
        };
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;
        debug!(?section, id, removed, "removed line item");
        removed
    }

    pub fn rename_item(&mut self, section: Section, id: &str, name: impl Into<String>) -> bool {
        match self.find_item_mut(section, id) {
            Some(item) => {
                item.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_item_amount(&mut self, section: Section, id: &str, amount: f64) -> bool {
        match self.find_item_mut(section, id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    fn find_item_mut(&mut self, section: Section, id: &str) -> Option<&mut LineItem> {
        self.items_mut(section)?
            .iter_mut()
            .find(|item| item.id == id)
    }

    pub fn set_fixed_expense(&mut self, field: FixedExpense, value: f64) {
        match field {
            FixedExpense::SocialSecurity => self.fixed_expenses.social_security = value,
            FixedExpense::Taxes => self.fixed_expenses.taxes = value,
            FixedExpense::Canon => self.fixed_expenses.canon = value,
        }
    }

    /// Switches between rented and owned premises; the stored price is kept.
    pub fn set_rented(&mut self, is_rented: bool) {
        debug!(is_rented, "rent mode changed");
        self.rent.is_rented = is_rented;
    }

    pub fn set_monthly_rent(&mut self, monthly_price: f64) {
        self.rent.monthly_price = monthly_price;
    }

    /// Sets the concession term and mirrors it into the valuation percentage.
    pub fn set_years_remaining(&mut self, years: u32) {
        let years = years.clamp(MIN_PERCENTAGE as u32, MAX_PERCENTAGE as u32);
        self.concession.years_remaining = years;
        self.valuation.percentage = years as f64;
        debug!(years, "concession term changed");
    }

    /// Sets the valuation percentage and mirrors its rounded value into the
    /// concession term.
    pub fn set_valuation_percentage(&mut self, percentage: f64) {
        let percentage = clamp_percentage(percentage);
        self.valuation.percentage = percentage;
        self.concession.years_remaining = percentage.round() as u32;
        debug!(percentage, "valuation percentage changed");
    }

    pub fn set_observations(&mut self, text: impl Into<String>) {
        self.concession.observations = text.into();
    }
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_PERCENTAGE;
    }
    value.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tobacco() -> Section {
        Section::Category(CategoryKind::Tobacco)
    }

    #[test]
    fn new_form_is_seeded_from_catalog() {
        let form = ValuationForm::default();
        assert_eq!(form.categories.len(), 6);
        let names: Vec<&str> = form
            .items(tobacco())
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Logista", "Comet", "Aldista"]);
        assert!(form.items(tobacco()).iter().all(|item| item.amount == 0.0));
        assert!(form.personnel.is_empty());
        assert!(!form.rent.is_rented);
        assert_eq!(form.concession.years_remaining, 25);
        assert_eq!(form.valuation.percentage, 25.0);
    }

    #[test]
    fn add_item_appends_empty_row() {
        let mut form = ValuationForm::default();
        let id = form.add_item(Section::Personnel).unwrap();
        assert_eq!(form.personnel.len(), 1);
        assert_eq!(form.personnel[0].id, id);
        assert_eq!(form.personnel[0].name, "");
        assert_eq!(form.personnel[0].amount, 0.0);

        let id = form.add_item(tobacco()).unwrap();
        let last = form.items(tobacco()).last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(form.items(tobacco()).len(), 4);
    }

    #[test]
    fn remove_item_keeps_the_rest_in_order() {
        let mut form = ValuationForm::default();
        let ids: Vec<String> = form.items(tobacco()).iter().map(|i| i.id.clone()).collect();
        form.set_item_amount(tobacco(), &ids[0], 100.0);
        form.set_item_amount(tobacco(), &ids[2], 300.0);

        assert!(form.remove_item(tobacco(), &ids[1]));
        let remaining: Vec<(String, f64)> = form
            .items(tobacco())
            .iter()
            .map(|item| (item.id.clone(), item.amount))
            .collect();
        assert_eq!(
            remaining,
            vec![(ids[0].clone(), 100.0), (ids[2].clone(), 300.0)]
        );
        assert!(!form.remove_item(tobacco(), &ids[1]));
    }

    #[test]
    fn edits_only_touch_the_addressed_item() {
        let mut form = ValuationForm::default();
        let id = form.items(tobacco())[1].id.clone();
        assert!(form.rename_item(tobacco(), &id, "Nuevo"));
        assert!(form.set_item_amount(tobacco(), &id, 42.0));
        assert!(!form.set_item_amount(Section::Personnel, &id, 1.0));

        let items = form.items(tobacco());
        assert_eq!(items[0].name, "Logista");
        assert_eq!(items[1].name, "Nuevo");
        assert_eq!(items[1].amount, 42.0);
    }

    #[test]
    fn years_and_percentage_stay_linked() {
        let mut form = ValuationForm::default();
        form.set_years_remaining(40);
        assert_eq!(form.valuation.percentage, 40.0);

        form.set_valuation_percentage(33.6);
        assert_eq!(form.valuation.percentage, 33.6);
        assert_eq!(form.concession.years_remaining, 34);

        form.set_valuation_percentage(250.0);
        assert_eq!(form.valuation.percentage, 100.0);
        assert_eq!(form.concession.years_remaining, 100);

        form.set_valuation_percentage(0.0);
        assert_eq!(form.valuation.percentage, 1.0);
        assert_eq!(form.concession.years_remaining, 1);

        form.set_years_remaining(0);
        assert_eq!(form.concession.years_remaining, 1);
        assert_eq!(form.valuation.percentage, 1.0);
    }

    #[test]
    fn toggling_rent_keeps_price() {
        let mut form = ValuationForm::default();
        form.set_rented(true);
        form.set_monthly_rent(500.0);
        assert_eq!(form.evaluate().total_expenses, 6000.0);

        form.set_rented(false);
        assert_eq!(form.rent.monthly_price, 500.0);
        assert_eq!(form.evaluate().total_expenses, 0.0);
    }

    #[test]
    fn evaluate_uses_form_inputs() {
        let mut form = ValuationForm::default();
        let id = form.items(tobacco())[0].id.clone();
        form.set_item_amount(tobacco(), &id, 1500.0);
        form.set_fixed_expense(FixedExpense::Taxes, 27.5);

        let result = form.evaluate();
        assert_relative_eq!(result.total_revenue, 1500.0);
        assert_relative_eq!(result.total_gross_profit, 127.5);
        assert_relative_eq!(result.total_net_profit, 100.0);
        assert_relative_eq!(result.estimated_valuation, 375.0);
        assert_relative_eq!(result.payback_years, 3.75, epsilon = 1e-9);
    }

    #[test]
    fn apply_catalog_keeps_items() {
        let mut form = ValuationForm::default();
        let id = form.items(tobacco())[0].id.clone();
        form.set_item_amount(tobacco(), &id, 1000.0);

        let mut catalog = Catalog::default();
        catalog.tobacco.margin_percent = 10.0;
        catalog.tobacco.label = "Tabaco nacional".to_string();
        form.apply_catalog(&catalog);

        let category = form.category(CategoryKind::Tobacco).unwrap();
        assert_eq!(category.margin_percent, 10.0);
        assert_eq!(category.label, "Tabaco nacional");
        assert_eq!(category.items.len(), 3);
        assert_relative_eq!(form.evaluate().total_gross_profit, 100.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = ValuationForm::default();
        form.set_years_remaining(10);
        form.add_item(Section::Personnel);
        form.set_observations("Licencia renovable");
        form.reset(&Catalog::default());
        assert_eq!(form.concession.years_remaining, 25);
        assert!(form.personnel.is_empty());
        assert!(form.concession.observations.is_empty());
    }
}
