//! Domain models for the pairing engine

mod catalog;
mod pairing;
mod request;

pub use catalog::*;
pub use pairing::*;
pub use request::*;
