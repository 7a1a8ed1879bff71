//! External service integrations

pub mod notification;
pub mod realtime;

pub use notification::{HttpNotificationSender, NotificationMessage, NotificationSender};
pub use realtime::{BroadcastEvent, BroadcastTarget, HttpRealtimeBroadcaster, RealtimeBroadcaster};
