//! B2B pairing evaluator: venue, audience and season driven recommendations

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::RandomSource;

const BASE_PROFIT_MIN: f64 = 4.5;
const BASE_PROFIT_SPREAD: f64 = 3.0;
const SCORE_FLOOR: u8 = 85;
const SCORE_SPREAD: f64 = 15.0;

/// Fixed stock level reported for B2B recommendations
pub const NOMINAL_STOCK: u32 = 75;

/// Selling season of a business plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarketSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl MarketSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketSeason::Spring => "spring",
            MarketSeason::Summer => "summer",
            MarketSeason::Autumn => "autumn",
            MarketSeason::Winter => "winter",
        }
    }

    pub fn profit_multiplier(&self) -> Decimal {
        match self {
            MarketSeason::Spring => Decimal::new(11, 1),
            MarketSeason::Summer => Decimal::new(9, 1),
            MarketSeason::Autumn => Decimal::new(12, 1),
            MarketSeason::Winter => Decimal::new(13, 1),
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            MarketSeason::Spring => "Spring menu refresh drives 25% increase in foot traffic.",
            MarketSeason::Summer => "Iced variants of this pairing boost summer sales by 40%.",
            MarketSeason::Autumn => "Pumpkin spice variant increases autumn revenue 35%.",
            MarketSeason::Winter => "Holiday packaging on this combo increases gifting sales 50%.",
        }
    }
}

/// Kind of business the pairing is sold in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Cafe,
    Restaurant,
    Hotel,
    Office,
}

impl Venue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Cafe => "cafe",
            Venue::Restaurant => "restaurant",
            Venue::Hotel => "hotel",
            Venue::Office => "office",
        }
    }

    pub fn profit_multiplier(&self) -> Decimal {
        match self {
            Venue::Cafe => Decimal::ONE,
            Venue::Restaurant => Decimal::new(12, 1),
            Venue::Hotel => Decimal::new(14, 1),
            Venue::Office => Decimal::new(9, 1),
        }
    }

    fn insight(&self) -> Option<&'static str> {
        match self {
            Venue::Hotel => {
                Some("HOTEL OPTIMIZATION: Price premium of 40% acceptable. Focus on presentation.")
            }
            Venue::Office => {
                Some("OFFICE SETTING: Speed is key. Pre-order system increases efficiency 60%.")
            }
            Venue::Cafe => Some(
                "CAFÉ SETTING: Create cozy atmosphere. Display pairing suggestions prominently.",
            ),
            Venue::Restaurant => None,
        }
    }
}

/// Target customer group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Millennials,
    Professionals,
    Students,
    Tourists,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Millennials => "millennials",
            Audience::Professionals => "professionals",
            Audience::Students => "students",
            Audience::Tourists => "tourists",
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            Audience::Millennials => {
                "Instagram-worthy presentation recommended. Use latte art and garnishes."
            }
            Audience::Professionals => "Quick service priority. Pre-prepare popular combinations.",
            Audience::Students => "Student discount available. Bundle deals increase sales 35%.",
            Audience::Tourists => "Local specialty highlight. Include origin story in marketing.",
        }
    }

    fn insight(&self) -> Option<&'static str> {
        match self {
            Audience::Millennials => Some("SOCIAL MEDIA: This pairing generates 3x more social shares."),
            Audience::Professionals => {
                Some("CORPORATE: Loyalty program adoption rate 78% with this demographic.")
            }
            Audience::Students | Audience::Tourists => None,
        }
    }
}

/// Score, profit and copy for one B2B recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct B2bEvaluation {
    pub score: u8,
    pub profit: Decimal,
    pub marketing: String,
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Evaluate a business pairing.
///
/// Draws two values from `rng`: the first sets the base profit in
/// `[4.5, 7.5)`, the second the score in `[85, 99]`.
pub fn evaluate_b2b<R: RandomSource + ?Sized>(
    coffee: &str,
    pastry: &str,
    season: MarketSeason,
    venue: Venue,
    audience: Audience,
    rng: &mut R,
) -> B2bEvaluation {
    let base_profit = Decimal::from_f64(BASE_PROFIT_MIN + rng.next_unit() * BASE_PROFIT_SPREAD)
        .unwrap_or(Decimal::new(45, 1));
    let profit = round_half_up(
        base_profit * season.profit_multiplier() * venue.profit_multiplier(),
        2,
    );

    let spread = (rng.next_unit() * SCORE_SPREAD).floor().clamp(0.0, SCORE_SPREAD - 1.0) as u8;
    let score = SCORE_FLOOR + spread;

    let insights: Vec<&str> = venue
        .insight()
        .into_iter()
        .chain(audience.insight())
        .chain(std::iter::once(season.strategy()))
        .collect();

    let margin_pct = round_half_up(profit * Decimal::TEN, 0).to_i64().unwrap_or_default();
    let roi_pct = round_half_up(Decimal::from(score) * Decimal::new(12, 1), 0)
        .to_i64()
        .unwrap_or_default();

    let marketing = format!(
        "B2B STRATEGIC RECOMMENDATION: {} + {} optimized for {} targeting {}. \
         Expected profit margin: {}%. {} {} ROI projection: {}% increase in category sales.",
        capitalize(coffee),
        capitalize(pastry),
        venue.as_str(),
        audience.as_str(),
        margin_pct,
        audience.advisory(),
        insights.join(" "),
        roi_pct
    );

    tracing::debug!(score, %profit, venue = venue.as_str(), "evaluated b2b pairing");

    B2bEvaluation {
        score,
        profit,
        marketing,
    }
}
