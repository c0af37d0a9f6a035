//! Frontend Models
//!
//! Data structures matching the EasyTrack HTTP API.

use serde::{Deserialize, Serialize};

/// The three reference-data collections managed from the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Areas,
    DamageCausers,
    AccidentTypes,
}

impl CatalogKind {
    /// Tab order in the manager
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Areas,
        CatalogKind::DamageCausers,
        CatalogKind::AccidentTypes,
    ];

    /// Path segment under `/api/catalogs/`
    pub fn slug(&self) -> &'static str {
        match self {
            CatalogKind::Areas => "areas",
            CatalogKind::DamageCausers => "damage-causers",
            CatalogKind::AccidentTypes => "accident-types",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CatalogKind::Areas => "Áreas",
            CatalogKind::DamageCausers => "Causantes de Daño",
            CatalogKind::AccidentTypes => "Tipos de Accidente",
        }
    }

    /// Areas are keyed by `code` elsewhere in the system
    pub fn requires_code(&self) -> bool {
        matches!(self, CatalogKind::Areas)
    }

    pub fn collection_path(&self) -> String {
        format!("/api/catalogs/{}", self.slug())
    }

    pub fn item_path(&self, id: u32) -> String {
        format!("/api/catalogs/{}/{}", self.slug(), id)
    }
}

/// Catalog entry as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Body for POST and PUT (whole-record replace)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

impl CatalogPayload {
    /// Minimal active entry, used by quick-add from selects
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            description: None,
            is_active: true,
            display_order: 0,
        }
    }
}

/// Label/value pair shown by the choice widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Logged-in user (subset used by the top bar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub area: Option<String>,
}

/// Entry from `/api/notifications`; only `read` and `type` are relied on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Missing or `null` counts as unread
    #[serde(default)]
    pub read: Option<bool>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        !self.read.unwrap_or(false)
    }
}

/// Pending transfers are consumed as opaque JSON
pub type PendingTransfer = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_routing_table() {
        assert_eq!(CatalogKind::Areas.collection_path(), "/api/catalogs/areas");
        assert_eq!(CatalogKind::DamageCausers.item_path(7), "/api/catalogs/damage-causers/7");
        assert_eq!(CatalogKind::AccidentTypes.title(), "Tipos de Accidente");
        assert!(CatalogKind::Areas.requires_code());
        assert!(!CatalogKind::DamageCausers.requires_code());
    }

    #[test]
    fn test_catalog_item_from_api_json() {
        let json = r#"{"id":1,"name":"Corte","code":"corte","isActive":true,"displayOrder":1}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.code.as_deref(), Some("corte"));
        assert!(item.description.is_none());
        assert!(item.is_active);
        assert_eq!(item.display_order, 1);
    }

    #[test]
    fn test_payload_omits_empty_optionals() {
        let payload = CatalogPayload::named("Caída");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Caída", "isActive": true, "displayOrder": 0})
        );
    }

    #[test]
    fn test_notification_type_field() {
        let json = r#"{"id":3,"read":false,"type":"new_reposition","extra":1}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind.as_deref(), Some("new_reposition"));
        assert!(n.is_unread());
    }

    #[test]
    fn test_notification_null_read_is_unread() {
        let json = r#"[{"id":"n-1","read":null,"type":"new_reposition"},{"type":"reposition_approved","read":true}]"#;
        let all: Vec<Notification> = serde_json::from_str(json).unwrap();
        assert!(all[0].is_unread());
        assert!(!all[1].is_unread());
    }
}
