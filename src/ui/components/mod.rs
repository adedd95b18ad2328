pub mod breakdown_table;
pub mod kpi_card;
pub mod line_item_group;
pub mod money_field;
pub mod payback_indicator;
pub mod proportion_chart;
pub mod summary_card;
pub mod toast;
