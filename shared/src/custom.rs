//! Keyword analysis for freeform (off-menu) coffee and pastry names

use rust_decimal::Decimal;

use crate::types::RandomSource;

/// Upper bound for custom scores
pub const MAX_CUSTOM_SCORE: u8 = 95;

const BASE_SCORE: u32 = 75;
const JITTER_RANGE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Coffee,
    Pastry,
}

struct KeywordRule {
    subject: Subject,
    keywords: &'static [&'static str],
    bonus: u32,
    insight: &'static str,
}

static KEYWORD_RULES: [KeywordRule; 6] = [
    KeywordRule {
        subject: Subject::Coffee,
        keywords: &["espresso", "dark"],
        bonus: 5,
        insight: "Strong coffee detected - pairs well with sweet pastries",
    },
    KeywordRule {
        subject: Subject::Coffee,
        keywords: &["latte", "milk"],
        bonus: 3,
        insight: "Milk-based coffee - versatile pairing options",
    },
    KeywordRule {
        subject: Subject::Coffee,
        keywords: &["cold", "iced"],
        bonus: 0,
        insight: "Cold beverage - recommend for warm weather",
    },
    KeywordRule {
        subject: Subject::Pastry,
        keywords: &["chocolate"],
        bonus: 5,
        insight: "Chocolate detected - universal pairing enhancer",
    },
    KeywordRule {
        subject: Subject::Pastry,
        keywords: &["fruit", "berry"],
        bonus: 4,
        insight: "Fruit elements add refreshing contrast",
    },
    KeywordRule {
        subject: Subject::Pastry,
        keywords: &["nut", "almond"],
        bonus: 3,
        insight: "Nutty flavors complement coffee naturally",
    },
];

const LOW_STOCK_INSIGHT: &str = "LOW STOCK: Push this item immediately";
const HIGH_MARGIN_INSIGHT: &str = "HIGH MARGIN: Excellent profit potential";

/// Outcome of a custom analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAnalysis {
    /// Rounded score, 0-95
    pub score: u8,
    /// Score before rounding, used for the recommendation tier
    pub raw_score: f64,
    pub marketing: String,
    pub insights: Vec<String>,
}

/// Sum of keyword, stock and margin bonuses with their insights, before jitter
pub fn keyword_bonuses(
    coffee_name: &str,
    pastry_name: &str,
    stock: u32,
    profit: Decimal,
) -> (u32, Vec<String>) {
    let coffee = coffee_name.to_lowercase();
    let pastry = pastry_name.to_lowercase();

    let mut score = BASE_SCORE;
    let mut insights = Vec::new();

    for rule in &KEYWORD_RULES {
        let haystack = match rule.subject {
            Subject::Coffee => &coffee,
            Subject::Pastry => &pastry,
        };
        if rule.keywords.iter().any(|kw| haystack.contains(kw)) {
            score += rule.bonus;
            insights.push(rule.insight.to_string());
        }
    }

    if stock < 30 {
        score += 10;
        insights.push(LOW_STOCK_INSIGHT.to_string());
    }

    if profit > Decimal::from(6) {
        score += 8;
        insights.push(HIGH_MARGIN_INSIGHT.to_string());
    }

    (score, insights)
}

fn recommendation(raw_score: f64) -> &'static str {
    if raw_score > 85.0 {
        "Highly Recommended"
    } else if raw_score > 75.0 {
        "Recommended"
    } else {
        "Worth Testing"
    }
}

/// Score an off-menu pairing by keyword heuristics plus a random jitter in `[0, 10)`
pub fn analyze_custom<R: RandomSource + ?Sized>(
    coffee_name: &str,
    pastry_name: &str,
    stock: u32,
    profit: Decimal,
    notes: &str,
    rng: &mut R,
) -> CustomAnalysis {
    let (bonus_score, insights) = keyword_bonuses(coffee_name, pastry_name, stock, profit);

    let jitter = rng.next_unit() * JITTER_RANGE;
    let raw_score = (f64::from(bonus_score) + jitter).min(f64::from(MAX_CUSTOM_SCORE));
    let score = raw_score.round() as u8;

    let opportunity = if stock < 50 {
        "immediate sales opportunity"
    } else {
        "steady revenue potential"
    };
    let considerations = if notes.is_empty() {
        String::new()
    } else {
        format!("Special considerations: {}.", notes)
    };

    let marketing = format!(
        "CUSTOM PAIRING ANALYSIS: {} meets {} - a unique combination with {}% compatibility score. \
         {}. With {}% stock and ${} profit margin, this pairing offers {}. {} \
         AI RECOMMENDATION: {} for your menu.",
        coffee_name,
        pastry_name,
        score,
        insights.join(". "),
        stock,
        profit,
        opportunity,
        considerations,
        recommendation(raw_score)
    );

    tracing::debug!(bonus_score, jitter, score, "analyzed custom pairing");

    CustomAnalysis {
        score,
        raw_score,
        marketing,
        insights,
    }
}
