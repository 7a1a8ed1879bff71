//! Data access layer

pub mod store;

pub use store::{CropConditions, FarmDataStore};
