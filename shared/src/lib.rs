//! Shared types and models for the FarmKonnect analytics platform
//!
//! This crate contains domain types shared between the backend services,
//! the alert dispatcher, and external API consumers.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
