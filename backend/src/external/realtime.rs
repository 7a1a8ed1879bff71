//! Realtime broadcast client for the WebSocket hub
//!
//! Fire-and-forget semantics: the hub fans events out to connected
//! dashboard clients; delivery is best effort.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Addressing for a broadcast: a single user's sockets or every socket
/// subscribed to a farm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastTarget {
    User(i64),
    Farm(i64),
}

/// Event payload forwarded to the hub
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BroadcastEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
}

impl BroadcastEvent {
    pub fn new(event_type: &str, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.to_string(),
            data,
        }
    }
}

/// Outbound realtime sink
#[async_trait]
pub trait RealtimeBroadcaster: Send + Sync {
    async fn broadcast(&self, target: BroadcastTarget, event: BroadcastEvent) -> AppResult<()>;
}

/// HTTP client for the WebSocket hub's broadcast endpoint
#[derive(Clone)]
pub struct HttpRealtimeBroadcaster {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpRealtimeBroadcaster {
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
        }
    }

    fn target_url(&self, target: BroadcastTarget) -> String {
        match target {
            BroadcastTarget::User(user_id) => format!("{}/user/{}", self.endpoint, user_id),
            BroadcastTarget::Farm(farm_id) => format!("{}/farm/{}", self.endpoint, farm_id),
        }
    }
}

#[async_trait]
impl RealtimeBroadcaster for HttpRealtimeBroadcaster {
    async fn broadcast(&self, target: BroadcastTarget, event: BroadcastEvent) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.target_url(target))
            .json(&event)
            .send()
            .await
            .map_err(|e| AppError::Broadcast(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::Broadcast(format!(
                "Broadcast hub returned {}",
                response.status()
            )))
        }
    }
}
