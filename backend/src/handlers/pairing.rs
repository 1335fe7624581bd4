//! HTTP handlers for pairing endpoints

use axum::{extract::State, Json};
use shared::{B2bPairingRequest, CatalogPairingRequest, CustomPairingRequest, PairingResult};

use crate::error::AppResult;
use crate::services::PairingService;
use crate::AppState;

/// Score two menu selections
pub async fn score_catalog(
    State(state): State<AppState>,
    Json(input): Json<CatalogPairingRequest>,
) -> AppResult<Json<PairingResult>> {
    let service = PairingService::new(state.clock);
    let result = service.score_catalog(&input)?;
    Ok(Json(result))
}

/// Score a pairing for a business venue
pub async fn score_b2b(
    State(state): State<AppState>,
    Json(input): Json<B2bPairingRequest>,
) -> AppResult<Json<PairingResult>> {
    let service = PairingService::new(state.clock);
    let result = service.score_b2b(&input)?;
    Ok(Json(result))
}

/// Score freeform item names
pub async fn score_custom(
    State(state): State<AppState>,
    Json(input): Json<CustomPairingRequest>,
) -> AppResult<Json<PairingResult>> {
    let service = PairingService::new(state.clock);
    let result = service.score_custom(&input)?;
    Ok(Json(result))
}
