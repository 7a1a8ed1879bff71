//! Notification service client
//!
//! The alert dispatcher only constructs and forwards structured messages;
//! actual email/SMS/push delivery belongs to the external notification
//! service behind this client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::types::{AlertPriority, NotificationChannels};

use crate::error::{AppError, AppResult};

/// Structured message forwarded to the notification service
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotificationMessage {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub priority: AlertPriority,
    pub channels: NotificationChannels,
}

/// Outbound notification sink
///
/// `urgent` lets the external sender bypass batching and quiet hours.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage, urgent: bool) -> AppResult<()>;
}

/// HTTP client for the notification service
#[derive(Clone)]
pub struct HttpNotificationSender {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct NotificationRequest<'a> {
    #[serde(flatten)]
    message: &'a NotificationMessage,
    urgent: bool,
}

#[derive(Deserialize)]
struct NotificationApiResponse {
    #[serde(default)]
    message: Option<String>,
}

impl HttpNotificationSender {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl NotificationSender for HttpNotificationSender {
    async fn send(&self, message: &NotificationMessage, urgent: bool) -> AppResult<()> {
        let request = NotificationRequest { message, urgent };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Notification(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error: NotificationApiResponse = response
                .json()
                .await
                .unwrap_or(NotificationApiResponse { message: None });
            Err(AppError::Notification(
                error
                    .message
                    .unwrap_or_else(|| format!("Notification service returned {}", status)),
            ))
        }
    }
}
