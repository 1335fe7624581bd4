//! HTTP handlers for the Brewly pairing server

pub mod health;
pub mod pairing;
pub mod reporting;

pub use health::health_check;
pub use pairing::{score_b2b, score_catalog, score_custom};
pub use reporting::export_report;
