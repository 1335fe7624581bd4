//! Scoring engine: blends the compatibility table with four heuristics
//!
//! Final score = base x 0.4 + time-fit x 2 + stock-urgency x 0.2
//!             + profit x 0.15 + season x 0.05, rounded, capped at 99.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::compatibility;
use crate::models::CatalogItem;
use crate::types::{is_scoring_summer, is_scoring_winter, local_hour, local_month0, DayPart};

/// Upper bound for catalog and B2B scores
pub const MAX_CATALOG_SCORE: u8 = 99;

const BASE_WEIGHT: f64 = 0.4;
const TIME_FIT_WEIGHT: f64 = 2.0;
const STOCK_WEIGHT: f64 = 0.2;
const PROFIT_WEIGHT: f64 = 0.15;
const SEASON_WEIGHT: f64 = 0.05;

/// Per-attribute weight in the time-fit sum
const ATTRIBUTE_WEIGHT: f64 = 0.3;

/// Customer preference for each part of the day, as 0-1 weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePreference {
    pub intensity: f64,
    pub sweetness: f64,
    pub richness: f64,
}

impl TimePreference {
    pub fn for_day_part(part: DayPart) -> Self {
        match part {
            DayPart::Morning => Self {
                intensity: 0.8,
                sweetness: 0.3,
                richness: 0.5,
            },
            DayPart::Afternoon => Self {
                intensity: 0.5,
                sweetness: 0.6,
                richness: 0.7,
            },
            DayPart::Evening => Self {
                intensity: 0.3,
                sweetness: 0.8,
                richness: 0.8,
            },
        }
    }
}

/// Intermediate sub-scores of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: u8,
    pub time_fit: f64,
    pub stock_urgency: u8,
    pub profit: u8,
    pub season: u8,
    pub total: u8,
}

/// How well the item attributes match the preference of the given part of the day
pub fn time_fit_score(intensity: u8, sweetness: u8, richness: u8, part: DayPart) -> f64 {
    let pref = TimePreference::for_day_part(part);
    let fit = |actual: u8, target: f64| (10.0 - (f64::from(actual) - target * 10.0).abs()) * ATTRIBUTE_WEIGHT;

    fit(intensity, pref.intensity) + fit(sweetness, pref.sweetness) + fit(richness, pref.richness)
}

/// Favor pushing low-stock items
pub fn stock_urgency_score(coffee_stock: u32, pastry_stock: u32) -> u8 {
    let avg_stock = (f64::from(coffee_stock) + f64::from(pastry_stock)) / 2.0;
    if avg_stock < 30.0 {
        100
    } else if avg_stock < 50.0 {
        85
    } else if avg_stock < 70.0 {
        70
    } else {
        50
    }
}

/// Favor high-margin combinations
pub fn profit_score(coffee_profit: Decimal, pastry_profit: Decimal) -> u8 {
    let total = coffee_profit + pastry_profit;
    if total > Decimal::from(9) {
        100
    } else if total > Decimal::from(7) {
        85
    } else if total > Decimal::from(5) {
        70
    } else {
        60
    }
}

/// Simulated weather adaptation from the zero-based month
pub fn season_score(coffee_id: &str, pastry_id: &str, month0: u32) -> u8 {
    if is_scoring_winter(month0) {
        let warm_coffee = matches!(coffee_id, "mocha" | "cappuccino" | "latte");
        let rich_pastry = matches!(pastry_id, "cinnamon-roll" | "tiramisu");
        if warm_coffee && rich_pastry {
            return 90;
        }
    } else if is_scoring_summer(month0) {
        let light_pastry = matches!(pastry_id, "danish" | "eclair" | "blueberry-scone");
        if coffee_id == "cold-brew" && light_pastry {
            return 95;
        }
    }
    75
}

/// Blend the five sub-scores into the final bounded score.
///
/// Intensity is read from the coffee item; sweetness and richness from the pastry.
pub fn score_pairing(
    coffee_id: &str,
    pastry_id: &str,
    coffee: &CatalogItem,
    pastry: &CatalogItem,
    now: &DateTime<FixedOffset>,
) -> ScoreBreakdown {
    let base = compatibility::base_score(coffee_id, pastry_id);
    let part = DayPart::from_hour(local_hour(now));
    let time_fit = time_fit_score(
        coffee.intensity_or_default(),
        pastry.sweetness_or_default(),
        pastry.richness_or_default(),
        part,
    );
    let stock_urgency = stock_urgency_score(coffee.stock, pastry.stock);
    let profit = profit_score(coffee.profit, pastry.profit);
    let season = season_score(coffee_id, pastry_id, local_month0(now));

    let blended = f64::from(base) * BASE_WEIGHT
        + time_fit * TIME_FIT_WEIGHT
        + f64::from(stock_urgency) * STOCK_WEIGHT
        + f64::from(profit) * PROFIT_WEIGHT
        + f64::from(season) * SEASON_WEIGHT;

    // Only the ceiling is enforced; the float-to-int cast saturates at zero.
    let total = blended.round().min(f64::from(MAX_CATALOG_SCORE)) as u8;

    tracing::debug!(
        coffee_id,
        pastry_id,
        base,
        time_fit,
        stock_urgency,
        profit,
        season,
        total,
        "scored catalog pairing"
    );

    ScoreBreakdown {
        base,
        time_fit,
        stock_urgency,
        profit,
        season,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(month: u32, hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, month, 15, hour, 0, 0)
            .unwrap()
    }

    fn item(id: &str, stock: u32, profit: Decimal) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            stock,
            intensity: Some(5),
            sweetness: Some(5),
            richness: Some(5),
            profit,
        }
    }

    #[test]
    fn test_espresso_biscotti_morning_breakdown() {
        let coffee = item("espresso", 50, Decimal::from(3));
        let pastry = item("almond-biscotti", 50, Decimal::from(3));
        let breakdown = score_pairing("espresso", "almond-biscotti", &coffee, &pastry, &at(4, 9));

        assert_eq!(breakdown.base, 95);
        // (10-3)*0.3 + (10-2)*0.3 + (10-0)*0.3
        assert!((breakdown.time_fit - 7.5).abs() < 1e-9);
        assert_eq!(breakdown.stock_urgency, 70);
        assert_eq!(breakdown.profit, 70);
        assert_eq!(breakdown.season, 75);
        // 38 + 15 + 14 + 10.5 + 3.75 = 81.25
        assert_eq!(breakdown.total, 81);
    }

    #[test]
    fn test_missing_attributes_default_to_five() {
        let mut coffee = item("espresso", 50, Decimal::from(3));
        let mut pastry = item("almond-biscotti", 50, Decimal::from(3));
        let explicit = score_pairing("espresso", "almond-biscotti", &coffee, &pastry, &at(4, 9));

        coffee.intensity = None;
        pastry.sweetness = None;
        pastry.richness = None;
        let defaulted = score_pairing("espresso", "almond-biscotti", &coffee, &pastry, &at(4, 9));
        assert_eq!(explicit, defaulted);
    }

    #[test]
    fn test_unknown_pair_uses_default_base() {
        let coffee = item("ristretto", 50, Decimal::from(3));
        let pastry = item("bagel", 50, Decimal::from(3));
        let breakdown = score_pairing("ristretto", "bagel", &coffee, &pastry, &at(4, 9));
        assert_eq!(breakdown.base, 70);
    }

    #[test]
    fn test_time_fit_targets_by_day_part() {
        assert!((time_fit_score(8, 3, 5, DayPart::Morning) - 9.0).abs() < 1e-9);
        assert!((time_fit_score(5, 6, 7, DayPart::Afternoon) - 9.0).abs() < 1e-9);
        assert!((time_fit_score(3, 8, 8, DayPart::Evening) - 9.0).abs() < 1e-9);
        assert!((time_fit_score(0, 10, 10, DayPart::Morning) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stock_urgency_steps() {
        assert_eq!(stock_urgency_score(20, 20), 100);
        assert_eq!(stock_urgency_score(29, 30), 100);
        assert_eq!(stock_urgency_score(30, 30), 85);
        assert_eq!(stock_urgency_score(49, 50), 85);
        assert_eq!(stock_urgency_score(50, 50), 70);
        assert_eq!(stock_urgency_score(69, 70), 70);
        assert_eq!(stock_urgency_score(70, 70), 50);
    }

    #[test]
    fn test_profit_steps_are_strict() {
        let d = |cents: i64| Decimal::new(cents, 2);
        assert_eq!(profit_score(d(500), d(500)), 100);
        assert_eq!(profit_score(d(450), d(450)), 85);
        assert_eq!(profit_score(d(350), d(350)), 70);
        assert_eq!(profit_score(d(250), d(250)), 60);
        assert_eq!(profit_score(d(300), d(200)), 60);
    }

    #[test]
    fn test_season_adaptation() {
        assert_eq!(season_score("mocha", "tiramisu", 11), 90);
        assert_eq!(season_score("latte", "cinnamon-roll", 1), 90);
        assert_eq!(season_score("espresso", "tiramisu", 11), 75);
        assert_eq!(season_score("cold-brew", "eclair", 6), 95);
        assert_eq!(season_score("cold-brew", "eclair", 9), 75);
        assert_eq!(season_score("cold-brew", "croissant", 6), 75);
        assert_eq!(season_score("mocha", "tiramisu", 6), 75);
    }

    #[test]
    fn test_best_case_menu_score() {
        let mut coffee = item("espresso", 0, Decimal::from(10));
        let mut pastry = item("almond-biscotti", 0, Decimal::from(10));
        coffee.intensity = Some(8);
        pastry.sweetness = Some(3);
        pastry.richness = Some(5);
        let breakdown = score_pairing("espresso", "almond-biscotti", &coffee, &pastry, &at(4, 8));
        // 38 + 18 + 20 + 15 + 3.75 = 94.75
        assert_eq!(breakdown.total, 95);
        assert!(breakdown.total <= MAX_CATALOG_SCORE);
    }
}
