//! Alert dispatch: threshold policy and multi-channel fan-out
//!
//! Consumes predictions from the yield, disease, and market models,
//! decides per prediction whether a threshold is crossed, composes the
//! alert content, and forwards it to the notification sender and the
//! realtime broadcaster. Both sinks are narrow trait objects so tests can
//! substitute recording doubles.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::models::{DiseaseRiskPrediction, MarketPricePrediction, YieldPrediction};
use shared::types::{AlertPriority, NotificationChannels, TradeRecommendation, Urgency};
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::external::{
    BroadcastEvent, BroadcastTarget, NotificationMessage, NotificationSender, RealtimeBroadcaster,
};

/// Alert threshold and channel configuration
///
/// Injected into the dispatcher at construction and replaced wholesale by
/// the admin endpoint; updates are rare administrative actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlertConfig {
    /// Disease probability at or above which an alert is emitted
    pub disease_risk_threshold: f64,
    /// Percent drop below historical average that triggers a yield alert
    pub yield_drop_threshold_percent: f64,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            disease_risk_threshold: 0.6,
            yield_drop_threshold_percent: 20.0,
            email_enabled: true,
            sms_enabled: true,
            push_enabled: true,
        }
    }
}

/// Farm and user the alerts are addressed to
#[derive(Debug, Clone, Copy)]
pub struct AlertTargets {
    pub user_id: i64,
    pub farm_id: i64,
}

/// Outcome of a batch dispatch across all three prediction categories
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchDispatchReport {
    pub disease_alerts_sent: usize,
    pub yield_alerts_sent: usize,
    pub market_alerts_sent: usize,
    pub errors: Vec<String>,
}

/// Alert dispatcher over injected outbound sinks
pub struct AlertDispatcher {
    notifier: Arc<dyn NotificationSender>,
    broadcaster: Arc<dyn RealtimeBroadcaster>,
    config: RwLock<AlertConfig>,
}

impl AlertDispatcher {
    pub fn new(
        notifier: Arc<dyn NotificationSender>,
        broadcaster: Arc<dyn RealtimeBroadcaster>,
    ) -> Self {
        Self::with_config(notifier, broadcaster, AlertConfig::default())
    }

    pub fn with_config(
        notifier: Arc<dyn NotificationSender>,
        broadcaster: Arc<dyn RealtimeBroadcaster>,
        config: AlertConfig,
    ) -> Self {
        Self {
            notifier,
            broadcaster,
            config: RwLock::new(config),
        }
    }

    /// Current alert configuration
    pub async fn config(&self) -> AlertConfig {
        self.config.read().await.clone()
    }

    /// Replace the alert configuration wholesale
    pub async fn set_config(&self, config: AlertConfig) {
        *self.config.write().await = config;
    }

    /// Emit an alert for every disease prediction at or above the
    /// configured probability threshold
    pub async fn dispatch_disease_alerts(
        &self,
        targets: AlertTargets,
        predictions: &[DiseaseRiskPrediction],
    ) -> AppResult<usize> {
        let config = self.config().await;
        let mut sent = 0;

        for prediction in predictions {
            if prediction.probability < config.disease_risk_threshold {
                continue;
            }

            let immediate = prediction.urgency == Urgency::Immediate;
            let priority = if immediate {
                AlertPriority::High
            } else {
                AlertPriority::Medium
            };

            let message = NotificationMessage {
                user_id: targets.user_id,
                kind: "disease_risk".to_string(),
                title: format!("Disease Risk Alert: {}", prediction.disease),
                content: format!(
                    "{} risk detected for {}.\n\
                     Probability: {:.0}%\n\
                     Risk level: {:?}\n\
                     Affected species: {}\n\
                     Recommended actions:\n{}",
                    match prediction.urgency {
                        Urgency::Immediate => "Immediate",
                        Urgency::Soon => "Elevated",
                        Urgency::Monitor => "Low",
                    },
                    prediction.disease,
                    prediction.probability * 100.0,
                    prediction.risk_level,
                    prediction.affected_species.join(", "),
                    prediction
                        .preventive_measures
                        .iter()
                        .map(|m| format!("- {}", m))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                priority,
                channels: NotificationChannels {
                    push: config.push_enabled,
                    email: config.email_enabled,
                    sms: config.sms_enabled,
                },
            };

            self.notifier.send(&message, immediate).await?;
            self.broadcaster
                .broadcast(
                    BroadcastTarget::User(targets.user_id),
                    BroadcastEvent::new("disease_alert", serde_json::to_value(prediction)?),
                )
                .await?;
            sent += 1;
        }

        Ok(sent)
    }

    /// Emit an alert for every yield prediction that falls below the
    /// historical average by more than the configured drop threshold
    ///
    /// SMS is suppressed for yield alerts regardless of config; a yield
    /// drop is never urgent enough to interrupt by text.
    pub async fn dispatch_yield_alerts(
        &self,
        targets: AlertTargets,
        predictions: &[YieldPrediction],
    ) -> AppResult<usize> {
        let config = self.config().await;
        let mut sent = 0;

        for prediction in predictions {
            if prediction.historical_average <= 0.0 {
                continue;
            }
            let change_percent = (prediction.predicted_yield - prediction.historical_average)
                / prediction.historical_average
                * 100.0;
            if change_percent >= -config.yield_drop_threshold_percent {
                continue;
            }

            let message = NotificationMessage {
                user_id: targets.user_id,
                kind: "yield_drop".to_string(),
                title: format!("Yield Drop Warning: {}", prediction.crop_type),
                content: format!(
                    "Predicted yield for {} is {:.1}% below the historical average.\n\
                     Predicted: {:.2}\n\
                     Historical average: {:.2}\n\
                     Confidence: {:.0}%\n\
                     {}",
                    prediction.crop_type,
                    change_percent.abs(),
                    prediction.predicted_yield,
                    prediction.historical_average,
                    prediction.confidence * 100.0,
                    prediction.recommendation,
                ),
                priority: AlertPriority::High,
                channels: NotificationChannels {
                    push: config.push_enabled,
                    email: config.email_enabled,
                    sms: false,
                },
            };

            self.notifier.send(&message, false).await?;
            self.broadcaster
                .broadcast(
                    BroadcastTarget::Farm(targets.farm_id),
                    BroadcastEvent::new("yield_alert", serde_json::to_value(prediction)?),
                )
                .await?;
            sent += 1;
        }

        Ok(sent)
    }

    /// Emit market alerts for strong sell or wait signals
    ///
    /// A sell-now recommendation with more than 5% movement alerts across
    /// all configured channels; a wait recommendation with more than 10%
    /// movement alerts without SMS. Anything else stays silent.
    pub async fn dispatch_market_alerts(
        &self,
        targets: AlertTargets,
        predictions: &[MarketPricePrediction],
    ) -> AppResult<usize> {
        let config = self.config().await;
        let mut sent = 0;

        for prediction in predictions {
            let message = match prediction.recommendation {
                TradeRecommendation::SellNow if prediction.price_change_percent > 5.0 => {
                    NotificationMessage {
                        user_id: targets.user_id,
                        kind: "market_price".to_string(),
                        title: format!("Market Alert: Sell {} Now", prediction.product_type),
                        content: format!(
                            "Prices for {} are falling; selling now is recommended.\n\
                             Predicted price: {:.2}\n\
                             Recent change: {:+.1}%\n\
                             Confidence: {:.0}%",
                            prediction.product_type,
                            prediction.predicted_price,
                            prediction.price_change_percent,
                            prediction.confidence * 100.0,
                        ),
                        priority: AlertPriority::High,
                        channels: NotificationChannels {
                            push: config.push_enabled,
                            email: config.email_enabled,
                            sms: config.sms_enabled,
                        },
                    }
                }
                TradeRecommendation::Wait if prediction.price_change_percent > 10.0 => {
                    NotificationMessage {
                        user_id: targets.user_id,
                        kind: "market_price".to_string(),
                        title: format!(
                            "Price Increase Expected: {}",
                            prediction.product_type
                        ),
                        content: format!(
                            "Prices for {} are trending up; holding is recommended.\n\
                             Predicted price: {:.2}\n\
                             Recent change: {:+.1}%\n\
                             Confidence: {:.0}%",
                            prediction.product_type,
                            prediction.predicted_price,
                            prediction.price_change_percent,
                            prediction.confidence * 100.0,
                        ),
                        priority: AlertPriority::Medium,
                        channels: NotificationChannels {
                            push: config.push_enabled,
                            email: config.email_enabled,
                            sms: false,
                        },
                    }
                }
                _ => continue,
            };

            self.notifier.send(&message, false).await?;
            self.broadcaster
                .broadcast(
                    BroadcastTarget::User(targets.user_id),
                    BroadcastEvent::new("market_alert", serde_json::to_value(prediction)?),
                )
                .await?;
            sent += 1;
        }

        Ok(sent)
    }

    /// Run all three alert categories sequentially
    ///
    /// A failure in one category is recorded and must not block the
    /// others.
    pub async fn dispatch_batch(
        &self,
        targets: AlertTargets,
        disease: &[DiseaseRiskPrediction],
        yields: &[YieldPrediction],
        market: &[MarketPricePrediction],
    ) -> BatchDispatchReport {
        let mut report = BatchDispatchReport::default();

        match self.dispatch_disease_alerts(targets, disease).await {
            Ok(sent) => report.disease_alerts_sent = sent,
            Err(e) => {
                tracing::error!("Disease alert dispatch failed: {}", e);
                report.errors.push(format!("disease: {}", e));
            }
        }

        match self.dispatch_yield_alerts(targets, yields).await {
            Ok(sent) => report.yield_alerts_sent = sent,
            Err(e) => {
                tracing::error!("Yield alert dispatch failed: {}", e);
                report.errors.push(format!("yield: {}", e));
            }
        }

        match self.dispatch_market_alerts(targets, market).await {
            Ok(sent) => report.market_alerts_sent = sent,
            Err(e) => {
                tracing::error!("Market alert dispatch failed: {}", e);
                report.errors.push(format!("market: {}", e));
            }
        }

        report
    }
}
