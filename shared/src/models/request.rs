//! Inputs to the three pairing entry points

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::CatalogItem;
use crate::b2b::{Audience, MarketSeason, Venue};

/// Menu pairing: two catalog selections
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPairingRequest {
    #[validate(length(min = 1, message = "Please select a coffee"))]
    pub coffee_id: String,
    #[validate(length(min = 1, message = "Please select a pastry"))]
    pub pastry_id: String,
    pub coffee: CatalogItem,
    pub pastry: CatalogItem,
}

/// Business pairing for a venue and audience
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct B2bPairingRequest {
    #[validate(length(min = 1, message = "Please select a coffee"))]
    pub coffee: String,
    #[validate(length(min = 1, message = "Please select a pastry"))]
    pub pastry: String,
    pub season: MarketSeason,
    pub venue: Venue,
    pub target_audience: Audience,
    /// Minimum acceptable margin, carried through to the result
    #[serde(default)]
    pub profit_margin: Option<Decimal>,
}

/// Freeform pairing of items not on the menu
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomPairingRequest {
    #[validate(length(min = 1, message = "Please enter a coffee name"))]
    pub coffee: String,
    #[validate(length(min = 1, message = "Please enter a pastry name"))]
    pub pastry: String,
    pub stock: u32,
    pub profit: Decimal,
    #[serde(default)]
    pub notes: String,
}
