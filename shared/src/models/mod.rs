//! Domain models for the FarmKonnect analytics platform

mod health;
mod market;
mod prediction;

pub use health::*;
pub use market::*;
pub use prediction::*;
