//! Pairing service: runs the shared engine with the server's clock and randomness

use std::sync::Arc;

use rand::rngs::ThreadRng;
use rand::Rng;
use shared::{
    B2bPairingRequest, CatalogPairingRequest, Clock, CustomPairingRequest, PairingResult,
    RandomSource,
};

use crate::error::AppResult;

/// Thread-local generator as a random source
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Pairing service for the three scoring modes
#[derive(Clone)]
pub struct PairingService {
    clock: Arc<dyn Clock + Send + Sync>,
}

impl PairingService {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { clock }
    }

    /// Score two menu selections
    pub fn score_catalog(&self, request: &CatalogPairingRequest) -> AppResult<PairingResult> {
        Ok(shared::score_catalog_pairing(request, self.clock.as_ref())?)
    }

    /// Score a business pairing with the given random source
    pub fn score_b2b_with<R: RandomSource + ?Sized>(
        &self,
        request: &B2bPairingRequest,
        rng: &mut R,
    ) -> AppResult<PairingResult> {
        Ok(shared::score_b2b_pairing(request, self.clock.as_ref(), rng)?)
    }

    pub fn score_b2b(&self, request: &B2bPairingRequest) -> AppResult<PairingResult> {
        self.score_b2b_with(request, &mut ThreadRandom::new())
    }

    /// Score a freeform pairing with the given random source
    pub fn score_custom_with<R: RandomSource + ?Sized>(
        &self,
        request: &CustomPairingRequest,
        rng: &mut R,
    ) -> AppResult<PairingResult> {
        Ok(shared::score_custom_pairing(request, self.clock.as_ref(), rng)?)
    }

    pub fn score_custom(&self, request: &CustomPairingRequest) -> AppResult<PairingResult> {
        self.score_custom_with(request, &mut ThreadRandom::new())
    }
}
