//! HTTP handlers for the FarmKonnect analytics backend

pub mod alerts;
pub mod analytics;
pub mod health;

pub use alerts::*;
pub use analytics::*;
pub use health::*;
