//! Per-category labels, default margins and starting suppliers.

use serde::{Deserialize, Serialize};

use super::entities::CategoryKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefaults {
    pub label: String,
    pub margin_percent: f64,
    pub suppliers: Vec<String>,
}

impl CategoryDefaults {
    fn new(label: &str, margin_percent: f64, suppliers: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            margin_percent,
            suppliers: suppliers.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Catalog of the six categories. Missing entries in a loaded file fall back
/// to the built-in values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Catalog {
    pub tobacco: CategoryDefaults,
    pub cigars: CategoryDefaults,
    pub smoking_accessories: CategoryDefaults,
    pub food: CategoryDefaults,
    pub top_ups: CategoryDefaults,
    pub other_products: CategoryDefaults,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            tobacco: CategoryDefaults::new("Tabaco", 8.5, &["Logista", "Comet", "Aldista"]),
            cigars: CategoryDefaults::new("Puros", 9.5, &["Logista", "Comet", "Aldista"]),
            smoking_accessories: CategoryDefaults::new(
                "Accesorios",
                40.0,
                &["Marcelino", "LogistaDis"],
            ),
            food: CategoryDefaults::new(
                "Alimentación",
                30.0,
                &["Refrescos/Agua", "Chucherías/Patatas"],
            ),
            top_ups: CategoryDefaults::new(
                "Recargas",
                1.25,
                &["Recargas Bus", "Recargas Teléfono", "Otras Recargas"],
            ),
            other_products: CategoryDefaults::new("Marroquinería", 50.0, &["Marroquinería"]),
        }
    }
}

impl Catalog {
    pub fn get(&self, kind: CategoryKind) -> &CategoryDefaults {
        match kind {
            CategoryKind::Tobacco => &self.tobacco,
            CategoryKind::Cigars => &self.cigars,
            CategoryKind::SmokingAccessories => &self.smoking_accessories,
            CategoryKind::Food => &self.food,
            CategoryKind::TopUps => &self.top_ups,
            CategoryKind::OtherProducts => &self.other_products,
        }
    }

    pub fn label(&self, kind: CategoryKind) -> &str {
        &self.get(kind).label
    }

    pub fn margin(&self, kind: CategoryKind) -> f64 {
        self.get(kind).margin_percent
    }

    /// Returns the first category whose margin is outside `0..=100` or not finite.
    pub fn invalid_margin(&self) -> Option<(CategoryKind, f64)> {
        CategoryKind::ALL.iter().find_map(|kind| {
            let margin = self.margin(*kind);
            if margin.is_finite() && (0.0..=100.0).contains(&margin) {
                None
            } else {
                Some((*kind, margin))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_margins() {
        let catalog = Catalog::default();
        assert_eq!(catalog.margin(CategoryKind::Tobacco), 8.5);
        assert_eq!(catalog.margin(CategoryKind::Cigars), 9.5);
        assert_eq!(catalog.margin(CategoryKind::SmokingAccessories), 40.0);
        assert_eq!(catalog.margin(CategoryKind::Food), 30.0);
        assert_eq!(catalog.margin(CategoryKind::TopUps), 1.25);
        assert_eq!(catalog.margin(CategoryKind::OtherProducts), 50.0);
        assert!(catalog.invalid_margin().is_none());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let json = r#"{ "topUps": { "label": "Recargas", "marginPercent": 2.0, "suppliers": [] } }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.margin(CategoryKind::TopUps), 2.0);
        assert!(catalog.get(CategoryKind::TopUps).suppliers.is_empty());
        assert_eq!(catalog.margin(CategoryKind::Tobacco), 8.5);
        assert_eq!(catalog.label(CategoryKind::OtherProducts), "Marroquinería");
    }

    #[test]
    fn flags_out_of_range_margin() {
        let mut catalog = Catalog::default();
        catalog.food.margin_percent = 130.0;
        assert_eq!(
            catalog.invalid_margin(),
            Some((CategoryKind::Food, 130.0))
        );
    }
}
