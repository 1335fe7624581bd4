//! Catalog items supplied by the menu (coffee or pastry)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Value substituted for an absent intensity/sweetness/richness attribute
pub const DEFAULT_ATTRIBUTE: u8 = 5;

/// A coffee or pastry as selected on the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    /// Menu text, e.g. "Espresso - $3.50"
    pub name: String,
    /// Current stock level, percent
    pub stock: u32,
    #[serde(default)]
    pub intensity: Option<u8>,
    #[serde(default)]
    pub sweetness: Option<u8>,
    #[serde(default)]
    pub richness: Option<u8>,
    /// Profit per unit sold
    pub profit: Decimal,
}

impl CatalogItem {
    /// Menu text before the price suffix (`"Espresso - $3.50"` -> `"Espresso"`)
    pub fn display_name(&self) -> &str {
        self.name.split(" - ").next().unwrap_or(&self.name)
    }

    pub fn intensity_or_default(&self) -> u8 {
        self.intensity.unwrap_or(DEFAULT_ATTRIBUTE)
    }

    pub fn sweetness_or_default(&self) -> u8 {
        self.sweetness.unwrap_or(DEFAULT_ATTRIBUTE)
    }

    pub fn richness_or_default(&self) -> u8 {
        self.richness.unwrap_or(DEFAULT_ATTRIBUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> CatalogItem {
        CatalogItem {
            id: "espresso".to_string(),
            name: name.to_string(),
            stock: 50,
            intensity: None,
            sweetness: Some(8),
            richness: None,
            profit: Decimal::new(350, 2),
        }
    }

    #[test]
    fn test_display_name_strips_price() {
        assert_eq!(item("Espresso - $3.50").display_name(), "Espresso");
        assert_eq!(item("Flat White").display_name(), "Flat White");
        assert_eq!(item("").display_name(), "");
    }

    #[test]
    fn test_attribute_defaults() {
        let espresso = item("Espresso");
        assert_eq!(espresso.intensity_or_default(), DEFAULT_ATTRIBUTE);
        assert_eq!(espresso.sweetness_or_default(), 8);
        assert_eq!(espresso.richness_or_default(), DEFAULT_ATTRIBUTE);
    }

    #[test]
    fn test_missing_attributes_deserialize_as_none() {
        let json = r#"{"id":"croissant","name":"Croissant - $3.00","stock":40,"profit":"2.10"}"#;
        let parsed: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sweetness, None);
        assert_eq!(parsed.profit, Decimal::new(210, 2));
    }
}
