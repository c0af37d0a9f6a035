//! Notification Sources
//!
//! Both sources polled by the top bar. A failed fetch yields an empty list so
//! one source never blanks the other.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use super::{get_json, read_json};
use crate::error::ApiError;
use crate::models::{Notification, PendingTransfer};
use crate::notifications::{decode_notifications, settle_source, unread_badge_notifications};

pub async fn fetch_pending_transfers(base: &str) -> Vec<PendingTransfer> {
    let url = format!("{}/api/transfers/pending", base);
    settle_source("pending transfers", get_json::<Vec<PendingTransfer>>(&url).await)
}

async fn fetch_notifications(base: &str) -> Result<Vec<serde_json::Value>, ApiError> {
    let url = format!("{}/api/notifications", base);
    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    read_json(response).await
}

/// Unread reposition/completion notifications
pub async fn fetch_unread_notifications(base: &str) -> Vec<Notification> {
    let raw = settle_source("notifications", fetch_notifications(base).await);
    unread_badge_notifications(decode_notifications(raw))
}
