use super::entities::{
    Category, CategoryBreakdown, CategoryKind, FixedExpenses, LineItem, RentState,
    ValuationResult,
};

/// Colours assigned to chart slices by position.
pub const CHART_PALETTE: [&str; 6] = [
    "#0f172a", "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6",
];

/// Payback horizons (in years) considered normal for this kind of shop.
pub const STANDARD_PAYBACK_MIN: f64 = 3.0;
pub const STANDARD_PAYBACK_MAX: f64 = 5.0;

/// Aggregates line items into category totals and derives the valuation.
///
/// Total over every numeric input: negative amounts flow straight through the
/// sums, net profit is floored at zero and the payback horizon falls back to
/// zero when there is no net profit.
pub fn compute(
    categories: &[Category],
    personnel: &[LineItem],
    fixed_expenses: &FixedExpenses,
    rent: &RentState,
    valuation_percentage: f64,
) -> ValuationResult {
    let mut breakdown = Vec::with_capacity(categories.len());
    let mut total_revenue = 0.0;
    let mut total_gross_profit = 0.0;

    for category in categories {
        let revenue = sum_amounts(&category.items);
        let profit = revenue * (category.margin_percent / 100.0);
        total_revenue += revenue;
        total_gross_profit += profit;
        breakdown.push(CategoryBreakdown {
            kind: category.kind,
            label: category.label.clone(),
            revenue,
            profit,
        });
    }

    let personnel_annual = sum_amounts(personnel);
    let total_expenses = rent.annual_cost() + personnel_annual + fixed_expenses.total();

    let total_net_profit = (total_gross_profit - total_expenses).max(0.0);
    let estimated_valuation = total_revenue * (valuation_percentage / 100.0);
    let payback_years = if total_net_profit > 0.0 {
        estimated_valuation / total_net_profit
    } else {
        0.0
    };

    ValuationResult {
        categories: breakdown,
        total_revenue,
        total_gross_profit,
        total_expenses,
        total_net_profit,
        estimated_valuation,
        payback_years,
    }
}

fn sum_amounts(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub kind: CategoryKind,
    pub label: String,
    pub value: f64,
    /// Fraction of the charted profit, 0 to 1.
    pub share: f64,
    pub color: &'static str,
}

/// Categories that contributed positive profit, ready for the proportion chart.
/// Totals are not affected by this filter.
pub fn chart_slices(result: &ValuationResult) -> Vec<ChartSlice> {
    let positive: Vec<&CategoryBreakdown> = result
        .categories
        .iter()
        .filter(|category| category.profit > 0.0)
        .collect();
    let charted_total: f64 = positive.iter().map(|category| category.profit).sum();

    positive
        .into_iter()
        .enumerate()
        .map(|(index, category)| ChartSlice {
            kind: category.kind,
            label: category.label.clone(),
            value: category.profit,
            share: category.profit / charted_total,
            color: CHART_PALETTE[index % CHART_PALETTE.len()],
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaybackAssessment {
    NoProfit,
    Fast,
    Standard,
    Slow,
}

impl PaybackAssessment {
    pub fn label(&self) -> &'static str {
        match self {
            PaybackAssessment::NoProfit => "Sin beneficio",
            PaybackAssessment::Fast => "Recuperación rápida",
            PaybackAssessment::Standard => "Estándar",
            PaybackAssessment::Slow => "Recuperación lenta",
        }
    }
}

pub fn payback_assessment(result: &ValuationResult) -> PaybackAssessment {
    if result.total_net_profit <= 0.0 {
        return PaybackAssessment::NoProfit;
    }

    let years = result.payback_years;
    if years < STANDARD_PAYBACK_MIN {
        PaybackAssessment::Fast
    } else if years <= STANDARD_PAYBACK_MAX {
        PaybackAssessment::Standard
    } else {
        PaybackAssessment::Slow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn category(kind: CategoryKind, margin: f64, amounts: &[f64]) -> Category {
        Category {
            kind,
            label: format!("{kind:?}"),
            items: amounts
                .iter()
                .enumerate()
                .map(|(index, amount)| LineItem::new(format!("item-{index}"), "", *amount))
                .collect(),
            margin_percent: margin,
        }
    }

    #[test]
    fn tobacco_only_scenario() {
        let categories = vec![category(CategoryKind::Tobacco, 8.5, &[1000.0, 500.0])];
        let result = compute(
            &categories,
            &[],
            &FixedExpenses::default(),
            &RentState::default(),
            25.0,
        );

        assert_relative_eq!(result.categories[0].revenue, 1500.0);
        assert_relative_eq!(result.categories[0].profit, 127.5);
        assert_relative_eq!(result.total_revenue, 1500.0);
        assert_relative_eq!(result.total_gross_profit, 127.5);
        assert_relative_eq!(result.total_expenses, 0.0);
        assert_relative_eq!(result.total_net_profit, 127.5);
        assert_relative_eq!(result.estimated_valuation, 375.0);
        assert_relative_eq!(result.payback_years, 375.0 / 127.5, epsilon = 1e-9);
    }

    #[test]
    fn losses_floor_net_profit_and_payback_at_zero() {
        // 10000 at 10% = 1000 gross profit against 1500 of expenses.
        let categories = vec![category(CategoryKind::OtherProducts, 10.0, &[10_000.0])];
        let expenses = FixedExpenses {
            social_security: 500.0,
            taxes: 500.0,
            canon: 500.0,
        };
        let result = compute(&categories, &[], &expenses, &RentState::default(), 80.0);

        assert_relative_eq!(result.total_gross_profit, 1000.0);
        assert_relative_eq!(result.total_expenses, 1500.0);
        assert_eq!(result.total_net_profit, 0.0);
        assert_relative_eq!(result.estimated_valuation, 8000.0);
        assert_eq!(result.payback_years, 0.0);
    }

    #[test]
    fn rent_only_counts_while_rented() {
        let mut rent = RentState {
            is_rented: true,
            monthly_price: 500.0,
        };
        let rented = compute(&[], &[], &FixedExpenses::default(), &rent, 25.0);
        assert_relative_eq!(rented.total_expenses, 6000.0);

        rent.is_rented = false;
        let owned = compute(&[], &[], &FixedExpenses::default(), &rent, 25.0);
        assert_eq!(owned.total_expenses, 0.0);
        assert_eq!(rent.monthly_price, 500.0);
    }

    #[test]
    fn personnel_and_fixed_expenses_are_summed() {
        let personnel = vec![
            LineItem::new("p1", "Dependiente", 18_000.0),
            LineItem::new("p2", "Refuerzo", 4_000.0),
        ];
        let expenses = FixedExpenses {
            social_security: 6_000.0,
            taxes: 1_200.0,
            canon: 300.0,
        };
        let rent = RentState {
            is_rented: true,
            monthly_price: 800.0,
        };
        let result = compute(&[], &personnel, &expenses, &rent, 25.0);
        assert_relative_eq!(result.total_expenses, 22_000.0 + 7_500.0 + 9_600.0);
    }

    #[test]
    fn negative_amounts_are_not_rejected() {
        let categories = vec![category(CategoryKind::Food, 30.0, &[100.0, -300.0])];
        let result = compute(
            &categories,
            &[],
            &FixedExpenses::default(),
            &RentState::default(),
            50.0,
        );
        assert_relative_eq!(result.total_revenue, -200.0);
        assert_relative_eq!(result.total_gross_profit, -60.0);
        assert_eq!(result.total_net_profit, 0.0);
        assert_relative_eq!(result.estimated_valuation, -100.0);
        assert_eq!(result.payback_years, 0.0);
    }

    #[test]
    fn breakdown_keeps_declaration_order() {
        let categories: Vec<Category> = CategoryKind::ALL
            .iter()
            .map(|kind| category(*kind, 10.0, &[]))
            .collect();
        let result = compute(
            &categories,
            &[],
            &FixedExpenses::default(),
            &RentState::default(),
            25.0,
        );
        let kinds: Vec<CategoryKind> = result.categories.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, CategoryKind::ALL.to_vec());
    }

    #[test]
    fn chart_skips_non_positive_profit() {
        let categories = vec![
            category(CategoryKind::Tobacco, 10.0, &[1000.0]),
            category(CategoryKind::Cigars, 10.0, &[]),
            category(CategoryKind::Food, 50.0, &[-20.0]),
            category(CategoryKind::TopUps, 10.0, &[3000.0]),
        ];
        let result = compute(
            &categories,
            &[],
            &FixedExpenses::default(),
            &RentState::default(),
            25.0,
        );
        let slices = chart_slices(&result);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].kind, CategoryKind::Tobacco);
        assert_eq!(slices[1].kind, CategoryKind::TopUps);
        assert_relative_eq!(slices[0].share, 0.25);
        assert_relative_eq!(slices[1].share, 0.75);
        assert_eq!(slices[0].color, CHART_PALETTE[0]);
        assert_eq!(slices[1].color, CHART_PALETTE[1]);
        // Totals still include the negative category.
        assert_relative_eq!(result.total_gross_profit, 100.0 + 300.0 - 10.0);
    }

    #[test]
    fn chart_is_empty_without_profit() {
        let result = ValuationResult::default();
        assert!(chart_slices(&result).is_empty());
    }

    #[test]
    fn payback_thresholds() {
        let mut result = ValuationResult {
            total_net_profit: 1000.0,
            ..ValuationResult::default()
        };

        result.payback_years = 2.99;
        assert_eq!(payback_assessment(&result), PaybackAssessment::Fast);
        result.payback_years = 3.0;
        assert_eq!(payback_assessment(&result), PaybackAssessment::Standard);
        result.payback_years = 5.0;
        assert_eq!(payback_assessment(&result), PaybackAssessment::Standard);
        result.payback_years = 5.01;
        assert_eq!(payback_assessment(&result), PaybackAssessment::Slow);

        result.total_net_profit = 0.0;
        result.payback_years = 0.0;
        assert_eq!(payback_assessment(&result), PaybackAssessment::NoProfit);
    }
}
