//! Entities mirrored from the widget factory server.
//!
//! Field names follow the server's JSON exactly (PascalCase, with `ID` spelled
//! in capitals), so every struct carries explicit renames.

use serde::{Deserialize, Serialize};

/// Numeric identifier assigned by the server.
pub type EntityId = u64;

/// Any record that carries a server-assigned `ID`.
pub trait HasId {
    fn id(&self) -> EntityId;
}

// --- Entities ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Widget {
    #[serde(rename = "ID")]
    pub id: EntityId,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "DeletedAt", default)]
    pub deleted_at: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Widget {
    /// A widget as the client knows it before any timestamps are attached.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            created_at: None,
            updated_at: None,
            deleted_at: None,
            name: name.into(),
        }
    }
}

impl HasId for Widget {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: EntityId,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "DeletedAt", default)]
    pub deleted_at: Option<String>,
    /// ID of the widget this order is for.
    #[serde(rename = "Widget")]
    pub widget: EntityId,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
}

impl Order {
    pub fn new(id: EntityId, widget: EntityId, quantity: i64) -> Self {
        Self {
            id,
            created_at: None,
            updated_at: None,
            deleted_at: None,
            widget,
            quantity,
        }
    }
}

impl HasId for Order {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// The minimal shape of a record: just its `ID`.
///
/// Delete payloads and delete request bodies only need this much; any other
/// fields the server includes are ignored on decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    #[serde(rename = "ID")]
    pub id: EntityId,
}

impl HasId for EntityRef {
    fn id(&self) -> EntityId {
        self.id
    }
}

// --- Request bodies ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWidgetRequest {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    #[serde(rename = "Widget")]
    pub widget: EntityId,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
}

/// Body of `DELETE /widget` and `DELETE /order`.
pub type DeleteRequest = EntityRef;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_decodes_server_json() {
        let json = r#"{
            "ID": 7,
            "CreatedAt": "2023-05-01T10:00:00Z",
            "UpdatedAt": "2023-05-01T10:00:00Z",
            "DeletedAt": null,
            "Name": "sprocket"
        }"#;
        let widget: Widget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.id, 7);
        assert_eq!(widget.name, "sprocket");
        assert_eq!(widget.created_at.as_deref(), Some("2023-05-01T10:00:00Z"));
        assert_eq!(widget.deleted_at, None);
    }

    #[test]
    fn order_tolerates_missing_timestamps() {
        let order: Order =
            serde_json::from_str(r#"{"ID": 3, "Widget": 7, "Quantity": 12}"#).unwrap();
        assert_eq!(order, Order::new(3, 7, 12));
    }

    #[test]
    fn entity_ref_ignores_extra_fields() {
        let r: EntityRef = serde_json::from_str(r#"{"ID": 9, "Name": "gone"}"#).unwrap();
        assert_eq!(r.id(), 9);
    }

    #[test]
    fn request_bodies_use_server_field_names() {
        let body = serde_json::to_value(CreateOrderRequest {
            widget: 4,
            quantity: 2,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"Widget": 4, "Quantity": 2}));

        let body = serde_json::to_value(DeleteRequest { id: 5 }).unwrap();
        assert_eq!(body, serde_json::json!({"ID": 5}));
    }
}
