//! Analytics and alerting services for the FarmKonnect platform

pub mod alert_dispatcher;
pub mod disease_risk;
pub mod insights;
pub mod market_forecast;
mod stats;
pub mod yield_predictor;

pub use alert_dispatcher::{AlertConfig, AlertDispatcher, AlertTargets, BatchDispatchReport};
pub use disease_risk::{assess_disease_risks, DiseaseRiskService};
pub use insights::{farm_insights, FarmInsights};
pub use market_forecast::forecast_price;
pub use yield_predictor::predict_yield;
