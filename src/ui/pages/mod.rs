pub mod report;
pub mod settings;
pub mod valuation;

pub use report::ReportPage;
pub use settings::SettingsPage;
pub use valuation::ValuationPage;
