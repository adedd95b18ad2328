//! Valuation domain: input model, catalog and the pure valuation engine.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod valuation;

pub use app_state::{Section, ValuationForm};
pub use catalog::{Catalog, CategoryDefaults};
pub use entities::{
    Category, CategoryBreakdown, CategoryKind, ConcessionState, FixedExpense, FixedExpenses,
    LineItem, RentState, ValuationResult, ValuationSettings,
};
pub use valuation::{
    chart_slices, compute, payback_assessment, ChartSlice, PaybackAssessment, CHART_PALETTE,
};
