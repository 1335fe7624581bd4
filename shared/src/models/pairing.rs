//! Pairing result models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::b2b::{Audience, Venue};

/// Which entry point produced a result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PairingMode {
    Catalog,
    B2b,
    Custom,
}

/// Demand level derived from average stock (low stock = high demand)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DemandLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
}

impl DemandLevel {
    /// Step function over average stock with breakpoints at 40/60/80
    pub fn from_stock(avg_stock: u32) -> Self {
        if avg_stock < 40 {
            DemandLevel::VeryHigh
        } else if avg_stock < 60 {
            DemandLevel::High
        } else if avg_stock < 80 {
            DemandLevel::Medium
        } else {
            DemandLevel::Low
        }
    }
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandLevel::VeryHigh => write!(f, "Very High"),
            DemandLevel::High => write!(f, "High"),
            DemandLevel::Medium => write!(f, "Medium"),
            DemandLevel::Low => write!(f, "Low"),
        }
    }
}

/// Output of one scoring invocation.
///
/// Created fresh per call and owned by the caller; the engine keeps no
/// reference to previous results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PairingResult {
    pub coffee: String,
    pub pastry: String,
    /// 0-99 (catalog, B2B) or 0-95 (custom)
    pub score: u8,
    pub profit: Decimal,
    pub avg_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee_stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pastry_stock: Option<u32>,
    pub demand: DemandLevel,
    pub marketing_text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_profile: Option<String>,
    pub algorithm: String,
    pub mode: PairingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_level_breakpoints() {
        let cases = [
            (39, DemandLevel::VeryHigh),
            (40, DemandLevel::High),
            (59, DemandLevel::High),
            (60, DemandLevel::Medium),
            (79, DemandLevel::Medium),
            (80, DemandLevel::Low),
            (81, DemandLevel::Low),
        ];
        for (stock, expected) in cases {
            assert_eq!(DemandLevel::from_stock(stock), expected, "stock {}", stock);
        }
    }

    #[test]
    fn test_demand_level_labels() {
        assert_eq!(DemandLevel::VeryHigh.to_string(), "Very High");
        assert_eq!(
            serde_json::to_string(&DemandLevel::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(serde_json::to_string(&PairingMode::B2b).unwrap(), "\"b2b\"");
    }
}
