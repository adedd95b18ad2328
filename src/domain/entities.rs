use serde::{Deserialize, Serialize};

/// The six fixed revenue categories of the shop, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKind {
    Tobacco,
    Cigars,
    SmokingAccessories,
    Food,
    TopUps,
    OtherProducts,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 6] = [
        CategoryKind::Tobacco,
        CategoryKind::Cigars,
        CategoryKind::SmokingAccessories,
        CategoryKind::Food,
        CategoryKind::TopUps,
        CategoryKind::OtherProducts,
    ];

    pub fn index(self) -> usize {
        match self {
            CategoryKind::Tobacco => 0,
            CategoryKind::Cigars => 1,
            CategoryKind::SmokingAccessories => 2,
            CategoryKind::Food => 3,
            CategoryKind::TopUps => 4,
            CategoryKind::OtherProducts => 5,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            CategoryKind::Tobacco => "🚬",
            CategoryKind::Cigars => "🛍️",
            CategoryKind::SmokingAccessories => "🔥",
            CategoryKind::Food => "🍬",
            CategoryKind::TopUps => "📱",
            CategoryKind::OtherProducts => "👜",
        }
    }
}

/// A single supplier or concept with its annual amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Only used to reconcile rows while editing.
    pub id: String,
    pub name: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub kind: CategoryKind,
    pub label: String,
    pub items: Vec<LineItem>,
    pub margin_percent: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedExpenses {
    pub social_security: f64,
    pub taxes: f64,
    pub canon: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedExpense {
    SocialSecurity,
    Taxes,
    Canon,
}

impl FixedExpenses {
    pub fn get(&self, field: FixedExpense) -> f64 {
        match field {
            FixedExpense::SocialSecurity => self.social_security,
            FixedExpense::Taxes => self.taxes,
            FixedExpense::Canon => self.canon,
        }
    }

    pub fn total(&self) -> f64 {
        self.social_security + self.taxes + self.canon
    }
}

/// Premises rental. `monthly_price` is kept even while the premises are owned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RentState {
    pub is_rented: bool,
    pub monthly_price: f64,
}

impl RentState {
    pub fn annual_cost(&self) -> f64 {
        if self.is_rented {
            self.monthly_price * 12.0
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcessionState {
    pub years_remaining: u32,
    pub observations: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationSettings {
    /// Share of annual revenue used as the sale price, 1 to 100.
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBreakdown {
    pub kind: CategoryKind,
    pub label: String,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValuationResult {
    pub categories: Vec<CategoryBreakdown>,
    pub total_revenue: f64,
    pub total_gross_profit: f64,
    pub total_expenses: f64,
    pub total_net_profit: f64,
    pub estimated_valuation: f64,
    pub payback_years: f64,
}
