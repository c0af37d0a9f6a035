//! Notification Badge Rules
//!
//! Which general notifications count toward the top bar badge, and how a
//! failed or malformed source response is folded into it.

use crate::error::ApiError;
use crate::models::{Notification, PendingTransfer};

/// Type tags that always count when unread
pub const BADGE_NOTIFICATION_TYPES: &[&str] = &[
    "new_reposition",
    "reposition_transfer",
    "reposition_approved",
    "reposition_rejected",
    "reposition_completed",
    "reposition_deleted",
    "completion_approval_needed",
];

/// Substrings that make any type tag count
const BADGE_TYPE_FRAGMENTS: &[&str] = &["reposition", "completion"];

fn is_badge_type(kind: &str) -> bool {
    BADGE_TYPE_FRAGMENTS.iter().any(|fragment| kind.contains(fragment))
        || BADGE_NOTIFICATION_TYPES.contains(&kind)
}

/// Unread and of a reposition/completion type
pub fn counts_toward_badge(notification: &Notification) -> bool {
    notification.is_unread() && notification.kind.as_deref().is_some_and(is_badge_type)
}

pub fn unread_badge_notifications(all: Vec<Notification>) -> Vec<Notification> {
    all.into_iter().filter(counts_toward_badge).collect()
}

/// A source that failed counts as empty so the other source still shows
pub fn settle_source<T>(source: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(source, error = %e, "notification source unavailable, counting as none");
        Vec::new()
    })
}

/// Decode entries one by one; a malformed entry is skipped, not the list
pub fn decode_notifications(raw: Vec<serde_json::Value>) -> Vec<Notification> {
    raw.into_iter()
        .filter_map(|entry| match serde_json::from_value::<Notification>(entry) {
            Ok(notification) => Some(notification),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed notification");
                None
            }
        })
        .collect()
}

pub fn badge_count(pending_transfers: usize, unread_notifications: usize) -> usize {
    pending_transfers + unread_notifications
}

/// Badge text, hidden at zero
pub fn badge_label(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// One-line description of an opaque transfer record
pub fn transfer_summary(transfer: &PendingTransfer) -> String {
    let id = transfer.get("id").and_then(|v| v.as_u64());
    let from = transfer.get("fromArea").and_then(|v| v.as_str());
    match (id, from) {
        (Some(id), Some(from)) => format!("Transferencia #{} desde {}", id, from),
        (Some(id), None) => format!("Transferencia #{}", id),
        (None, _) => "Transferencia pendiente".to_string(),
    }
}

/// Title line for a notification, falling back to its type tag
pub fn notification_heading(notification: &Notification) -> String {
    notification
        .title
        .clone()
        .or_else(|| notification.kind.clone())
        .unwrap_or_else(|| "Notificación".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(read: bool, kind: Option<&str>) -> Notification {
        Notification {
            read: Some(read),
            kind: kind.map(str::to_string),
            title: None,
            message: None,
        }
    }

    #[test]
    fn test_badge_sums_both_sources() {
        let pending: Vec<PendingTransfer> = vec![
            serde_json::json!({"id": 1}),
            serde_json::json!({"id": 2}),
        ];
        let raw = vec![
            notification(false, Some("new_reposition")),
            notification(true, Some("new_reposition")),
            notification(false, Some("unrelated")),
        ];
        let unread = unread_badge_notifications(raw);
        assert_eq!(unread.len(), 1);
        assert_eq!(badge_count(pending.len(), unread.len()), 3);
    }

    #[test]
    fn test_fragment_matches() {
        assert!(counts_toward_badge(&notification(false, Some("partial_reposition_update"))));
        assert!(counts_toward_badge(&notification(false, Some("order_completion"))));
        assert!(counts_toward_badge(&notification(false, Some("completion_approval_needed"))));
        assert!(!counts_toward_badge(&notification(false, Some("transfer_created"))));
        assert!(!counts_toward_badge(&notification(false, None)));
    }

    #[test]
    fn test_allow_list_entries_all_count() {
        for kind in BADGE_NOTIFICATION_TYPES {
            assert!(counts_toward_badge(&notification(false, Some(kind))), "{}", kind);
            assert!(!counts_toward_badge(&notification(true, Some(kind))), "{}", kind);
        }
    }

    #[test]
    fn test_badge_label_hidden_at_zero() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("3"));
    }

    #[test]
    fn test_transfer_summary() {
        assert_eq!(
            transfer_summary(&serde_json::json!({"id": 7, "fromArea": "corte"})),
            "Transferencia #7 desde corte"
        );
        assert_eq!(transfer_summary(&serde_json::json!({"id": 7})), "Transferencia #7");
        assert_eq!(transfer_summary(&serde_json::json!({})), "Transferencia pendiente");
    }

    #[test]
    fn test_notification_heading_fallbacks() {
        let mut n = notification(false, Some("new_reposition"));
        assert_eq!(notification_heading(&n), "new_reposition");
        n.title = Some("Nueva reposición".to_string());
        assert_eq!(notification_heading(&n), "Nueva reposición");
        assert_eq!(notification_heading(&notification(false, None)), "Notificación");
    }

    #[test]
    fn test_failing_source_counts_as_zero() {
        let pending = settle_source::<PendingTransfer>("transfers", Err(ApiError::Status { status: 503 }));
        let raw = vec![
            serde_json::json!({"read": false, "type": "new_reposition"}),
            serde_json::json!({"read": null, "type": "completion_approval_needed"}),
        ];
        let unread = unread_badge_notifications(decode_notifications(settle_source("notifications", Ok(raw))));

        assert!(pending.is_empty());
        assert_eq!(badge_count(pending.len(), unread.len()), 2);

        let offline = settle_source::<serde_json::Value>("notifications", Err(ApiError::Network("offline".into())));
        let pending = settle_source("transfers", Ok(vec![serde_json::json!({"id": 1})]));
        assert_eq!(badge_count(pending.len(), offline.len()), 1);
    }

    #[test]
    fn test_malformed_entry_does_not_drop_the_rest() {
        let raw = vec![
            serde_json::json!({"id": "n-1", "read": null, "type": "new_reposition"}),
            serde_json::json!({"read": "yes", "type": "reposition_transfer"}),
            serde_json::json!({"read": false, "type": 42}),
            serde_json::json!({"read": false, "type": "reposition_completed", "title": "Listo"}),
        ];
        let decoded = decode_notifications(raw);
        assert_eq!(decoded.len(), 2);
        assert_eq!(unread_badge_notifications(decoded).len(), 2);
    }
}
