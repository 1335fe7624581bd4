//! Entry points consumed by the browser widget and the HTTP service
//!
//! Each call validates the selections, scores, and returns a fresh
//! [`PairingResult`]. Time and randomness come in through [`Clock`] and
//! [`RandomSource`] so results are reproducible under test.

use chrono::Utc;

use crate::b2b::{self, NOMINAL_STOCK};
use crate::compatibility;
use crate::custom;
use crate::error::PairingError;
use crate::marketing::{self, MarketingContext};
use crate::models::{
    B2bPairingRequest, CatalogPairingRequest, CustomPairingRequest, DemandLevel, PairingMode,
    PairingResult,
};
use crate::scoring;
use crate::types::{Clock, RandomSource};
use crate::validation::require_selections;

pub const CATALOG_ALGORITHM: &str = "BrewlyAI v2.0 Advanced";
pub const B2B_ALGORITHM: &str = "BrewlyAI B2B Analytics Engine";
pub const CUSTOM_ALGORITHM: &str = "BrewlyAI Custom Analysis Engine";

const UNKNOWN_SEASON: &str = "all seasons";
const UNKNOWN_BEST_TIME: &str = "all day";
const UNKNOWN_FLAVOR: &str = "delightful";

/// Average of two stock levels, rounded half up
pub fn average_stock(coffee_stock: u32, pastry_stock: u32) -> u32 {
    ((u64::from(coffee_stock) + u64::from(pastry_stock) + 1) / 2) as u32
}

/// Score a pairing of two menu items
pub fn score_catalog_pairing<C: Clock + ?Sized>(
    request: &CatalogPairingRequest,
    clock: &C,
) -> Result<PairingResult, PairingError> {
    require_selections(request, &["coffee_id", "pastry_id"])?;

    let now = clock.now();
    let coffee_id = request.coffee_id.as_str();
    let pastry_id = request.pastry_id.as_str();

    let breakdown = scoring::score_pairing(coffee_id, pastry_id, &request.coffee, &request.pastry, &now);
    let profit = request.coffee.profit + request.pastry.profit;
    let avg_stock = average_stock(request.coffee.stock, request.pastry.stock);

    let ctx = MarketingContext {
        coffee_name: request.coffee.display_name(),
        pastry_name: request.pastry.display_name(),
        coffee_stock: request.coffee.stock,
        pastry_stock: request.pastry.stock,
        profit,
        now,
    };
    let marketing_text = marketing::generate_marketing(coffee_id, pastry_id, breakdown.total, &ctx);

    let profile = compatibility::coffee_profile(coffee_id);

    tracing::info!(coffee_id, pastry_id, score = breakdown.total, "generated catalog pairing");

    Ok(PairingResult {
        coffee: request.coffee.name.clone(),
        pastry: request.pastry.name.clone(),
        score: breakdown.total,
        profit,
        avg_stock,
        coffee_stock: Some(request.coffee.stock),
        pastry_stock: Some(request.pastry.stock),
        demand: DemandLevel::from_stock(avg_stock),
        marketing_text,
        timestamp: now.with_timezone(&Utc),
        season: Some(
            profile
                .map(|p| p.season_label())
                .unwrap_or_else(|| UNKNOWN_SEASON.to_string()),
        ),
        best_time: Some(
            profile
                .map(|p| p.serving_time_label())
                .unwrap_or_else(|| UNKNOWN_BEST_TIME.to_string()),
        ),
        flavor_profile: Some(
            profile
                .map(|p| p.description)
                .unwrap_or(UNKNOWN_FLAVOR)
                .to_string(),
        ),
        algorithm: CATALOG_ALGORITHM.to_string(),
        mode: PairingMode::Catalog,
        venue: None,
        target_audience: None,
        profit_margin: None,
        custom_notes: None,
        insights: Vec::new(),
    })
}

/// Score a pairing for a business venue and audience
pub fn score_b2b_pairing<C, R>(
    request: &B2bPairingRequest,
    clock: &C,
    rng: &mut R,
) -> Result<PairingResult, PairingError>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    require_selections(request, &["coffee", "pastry"])?;

    let now = clock.now();
    let evaluation = b2b::evaluate_b2b(
        &request.coffee,
        &request.pastry,
        request.season,
        request.venue,
        request.target_audience,
        rng,
    );

    tracing::info!(
        venue = request.venue.as_str(),
        audience = request.target_audience.as_str(),
        score = evaluation.score,
        "generated b2b pairing"
    );

    Ok(PairingResult {
        coffee: b2b::capitalize(&request.coffee),
        pastry: b2b::capitalize(&request.pastry),
        score: evaluation.score,
        profit: evaluation.profit,
        avg_stock: NOMINAL_STOCK,
        coffee_stock: None,
        pastry_stock: None,
        demand: DemandLevel::from_stock(NOMINAL_STOCK),
        marketing_text: evaluation.marketing,
        timestamp: now.with_timezone(&Utc),
        season: Some(request.season.as_str().to_string()),
        best_time: None,
        flavor_profile: None,
        algorithm: B2B_ALGORITHM.to_string(),
        mode: PairingMode::B2b,
        venue: Some(request.venue),
        target_audience: Some(request.target_audience),
        profit_margin: request.profit_margin,
        custom_notes: None,
        insights: Vec::new(),
    })
}

/// Score a pairing of freeform item names
pub fn score_custom_pairing<C, R>(
    request: &CustomPairingRequest,
    clock: &C,
    rng: &mut R,
) -> Result<PairingResult, PairingError>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    require_selections(request, &["coffee", "pastry"])?;

    let now = clock.now();
    let analysis = custom::analyze_custom(
        &request.coffee,
        &request.pastry,
        request.stock,
        request.profit,
        &request.notes,
        rng,
    );

    tracing::info!(score = analysis.score, insights = analysis.insights.len(), "generated custom pairing");

    Ok(PairingResult {
        coffee: request.coffee.clone(),
        pastry: request.pastry.clone(),
        score: analysis.score,
        profit: request.profit,
        avg_stock: request.stock,
        coffee_stock: None,
        pastry_stock: None,
        demand: DemandLevel::from_stock(request.stock),
        marketing_text: analysis.marketing,
        timestamp: now.with_timezone(&Utc),
        season: None,
        best_time: None,
        flavor_profile: None,
        algorithm: CUSTOM_ALGORITHM.to_string(),
        mode: PairingMode::Custom,
        venue: None,
        target_audience: None,
        profit_margin: None,
        custom_notes: Some(request.notes.clone()).filter(|notes| !notes.is_empty()),
        insights: analysis.insights,
    })
}
