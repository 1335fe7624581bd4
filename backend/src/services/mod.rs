//! Business logic services for the Brewly pairing server

pub mod pairing;
pub mod report;

pub use pairing::PairingService;
pub use report::ReportService;
