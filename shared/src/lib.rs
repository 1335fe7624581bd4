//! Pairing engine for the Brewly coffee shop
//!
//! Scores coffee and pastry combinations, writes the marketing copy for
//! them, and renders downloadable reports. Used by the HTTP backend and,
//! through WASM, by the in-browser widget.

pub mod b2b;
pub mod compatibility;
pub mod custom;
pub mod engine;
pub mod error;
pub mod marketing;
pub mod models;
pub mod report;
pub mod scoring;
pub mod types;
pub mod validation;

pub use b2b::{Audience, MarketSeason, Venue};
pub use engine::{score_b2b_pairing, score_catalog_pairing, score_custom_pairing};
pub use error::{PairingError, ReportError};
pub use models::*;
pub use report::{star_rating, ReportFormat};
pub use types::*;
