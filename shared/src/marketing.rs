//! Marketing text generator for menu pairings
//!
//! Candidate insights are collected in a fixed priority order (time of day,
//! score tier, stock, premium profit, season) and only the first two are
//! printed, so identical inputs always surface the same two.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use crate::types::{local_hour, local_month0};

/// Inputs the generator reads besides the item ids and score
#[derive(Debug, Clone)]
pub struct MarketingContext<'a> {
    pub coffee_name: &'a str,
    pub pastry_name: &'a str,
    pub coffee_stock: u32,
    pub pastry_stock: u32,
    /// Combined unit profit of both items
    pub profit: Decimal,
    pub now: DateTime<FixedOffset>,
}

/// A templated marketing sentence triggered by one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    MorningSpecial,
    AfternoonPickMeUp,
    TopPick,
    HighlyRecommended,
    CustomerFavorite,
    LimitedAvailability,
    TrendingNow,
    PremiumSelection,
    WinterWarmer,
    SummerSensation,
}

impl Insight {
    pub fn text(&self) -> &'static str {
        match self {
            Insight::MorningSpecial => "MORNING SPECIAL: Perfect energy boost to start your day!",
            Insight::AfternoonPickMeUp => {
                "AFTERNOON PICK-ME-UP: Beat the 3pm slump with this perfect pairing!"
            }
            Insight::TopPick => "AI TOP PICK: Our algorithm rates this as an EXCEPTIONAL match!",
            Insight::HighlyRecommended => {
                "HIGHLY RECOMMENDED: 92% of customers who try this become regulars!"
            }
            Insight::CustomerFavorite => {
                "CUSTOMER FAVORITE: Consistently high ratings from our community!"
            }
            Insight::LimitedAvailability => {
                "LIMITED AVAILABILITY: Only a few left today - order now!"
            }
            Insight::TrendingNow => "TRENDING NOW: This pairing is flying off our shelves!",
            Insight::PremiumSelection => "PREMIUM SELECTION: Indulge in our finest offerings!",
            Insight::WinterWarmer => "WINTER WARMER: Cozy up with this seasonal favorite!",
            Insight::SummerSensation => "SUMMER SENSATION: Refreshing combination for warm days!",
        }
    }
}

/// All applicable insights, highest priority first
pub fn collect_insights(score: u8, ctx: &MarketingContext<'_>) -> Vec<Insight> {
    let mut insights = Vec::new();

    let hour = local_hour(&ctx.now);
    if hour < 10 {
        insights.push(Insight::MorningSpecial);
    } else if (14..17).contains(&hour) {
        insights.push(Insight::AfternoonPickMeUp);
    }

    if score >= 95 {
        insights.push(Insight::TopPick);
    } else if score >= 90 {
        insights.push(Insight::HighlyRecommended);
    } else if score >= 85 {
        insights.push(Insight::CustomerFavorite);
    }

    let avg_stock = (f64::from(ctx.coffee_stock) + f64::from(ctx.pastry_stock)) / 2.0;
    if avg_stock < 35.0 {
        insights.push(Insight::LimitedAvailability);
    } else if avg_stock < 50.0 {
        insights.push(Insight::TrendingNow);
    }

    if ctx.profit > Decimal::from(8) {
        insights.push(Insight::PremiumSelection);
    }

    // Zero-based months: December/January, then July through September.
    let month0 = local_month0(&ctx.now);
    if month0 == 11 || month0 == 0 {
        insights.push(Insight::WinterWarmer);
    } else if (6..=8).contains(&month0) {
        insights.push(Insight::SummerSensation);
    }

    insights
}

const DEFAULT_KEY: &str = "default";

type DescriptionTable = &'static [(&'static str, &'static [(&'static str, &'static str)])];

static DESCRIPTIONS: DescriptionTable = &[
    (
        "espresso",
        &[
            (
                "almond-biscotti",
                "The nutty crunch perfectly complements the bold espresso notes.",
            ),
            (
                "tiramisu",
                "Italian perfection - coffee-soaked layers meet concentrated espresso.",
            ),
            (DEFAULT_KEY, "Bold intensity balanced with delicate sweetness."),
        ],
    ),
    (
        "cappuccino",
        &[
            (
                "croissant",
                "Buttery layers melt into velvety foam for pure indulgence.",
            ),
            (
                "cinnamon-roll",
                "Warm spices dance with creamy coffee in perfect harmony.",
            ),
            (DEFAULT_KEY, "Creamy sophistication meets artisanal craftsmanship."),
        ],
    ),
    (
        "latte",
        &[
            (
                "blueberry-scone",
                "Fresh berry tartness cuts through milky smoothness beautifully.",
            ),
            (
                "chocolate-muffin",
                "Chocolate and coffee unite in a symphony of comfort.",
            ),
            (DEFAULT_KEY, "Smooth, mild coffee embraces sweet pastry perfection."),
        ],
    ),
];

const FALLBACK_DESCRIPTION: &str = "A thoughtfully crafted pairing that delights the palate.";

fn lookup(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn coffee_descriptions(coffee_id: &str) -> Option<&'static [(&'static str, &'static str)]> {
    DESCRIPTIONS
        .iter()
        .find(|(k, _)| *k == coffee_id)
        .map(|(_, table)| *table)
}

/// Flavor note for a pair: exact pair, then the coffee's default, then the global default
pub fn flavor_description(coffee_id: &str, pastry_id: &str) -> &'static str {
    if let Some(table) = coffee_descriptions(coffee_id) {
        if let Some(text) = lookup(table, pastry_id) {
            return text;
        }
        if let Some(text) = lookup(table, DEFAULT_KEY) {
            return text;
        }
    }
    FALLBACK_DESCRIPTION
}

/// Build the marketing paragraph for a menu pairing
pub fn generate_marketing(
    coffee_id: &str,
    pastry_id: &str,
    score: u8,
    ctx: &MarketingContext<'_>,
) -> String {
    let insights = collect_insights(score, ctx);
    let primary = insights.first().map(Insight::text).unwrap_or("");
    let secondary = insights.get(1).map(Insight::text).unwrap_or("");

    format!(
        "Experience the extraordinary harmony of {} paired with our artisanal {}. {} {} {}",
        ctx.coffee_name,
        ctx.pastry_name,
        flavor_description(coffee_id, pastry_id),
        primary,
        secondary
    )
}
