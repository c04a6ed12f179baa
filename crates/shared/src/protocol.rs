//! Stream message protocol and endpoint paths.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::models::EntityRef;

/// WebSocket endpoint streaming order changes
pub const WS_ORDERS_PATH: &str = "/ws/orders";
/// WebSocket endpoint streaming widget changes
pub const WS_WIDGETS_PATH: &str = "/ws/widgets";

pub const WIDGET_PATH: &str = "/widget";
pub const ORDER_PATH: &str = "/order";
pub const SQL_PATH: &str = "/sql";

/// Discriminator carried in the `Kind` field of every stream message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StreamMessageKind {
    Load,
    Create,
    Delete,
    Error,
}

impl StreamMessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamMessageKind::Load => "load",
            StreamMessageKind::Create => "create",
            StreamMessageKind::Delete => "delete",
            StreamMessageKind::Error => "error",
        }
    }

    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "load" => Some(StreamMessageKind::Load),
            "create" => Some(StreamMessageKind::Create),
            "delete" => Some(StreamMessageKind::Delete),
            "error" => Some(StreamMessageKind::Error),
            _ => None,
        }
    }
}

impl fmt::Display for StreamMessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stream message exactly as it appears on the wire.
///
/// `Kind` is kept as a string here so unknown kinds can be reported rather
/// than failing the whole decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamMessage {
    #[serde(rename = "Kind")]
    pub kind: String,
    #[serde(rename = "Object", default)]
    pub object: serde_json::Value,
}

impl StreamMessage {
    pub fn new(kind: StreamMessageKind, object: serde_json::Value) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            object,
        }
    }
}

/// A stream message decoded against a concrete entity type.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent<T> {
    /// Full-state resync: replaces the whole collection.
    Load(Vec<T>),
    Create(T),
    /// Removes the first entity with this ID.
    Delete(EntityRef),
    /// Server-reported failure; the payload is untyped.
    Error(serde_json::Value),
}

impl<T> StreamEvent<T> {
    pub fn kind(&self) -> StreamMessageKind {
        match self {
            StreamEvent::Load(_) => StreamMessageKind::Load,
            StreamEvent::Create(_) => StreamMessageKind::Create,
            StreamEvent::Delete(_) => StreamMessageKind::Delete,
            StreamEvent::Error(_) => StreamMessageKind::Error,
        }
    }
}

impl<T: DeserializeOwned> StreamEvent<T> {
    /// Decode a text frame into a typed event.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let raw: StreamMessage = serde_json::from_str(text)?;
        Self::from_message(raw)
    }

    pub fn from_message(message: StreamMessage) -> Result<Self, ProtocolError> {
        let kind = StreamMessageKind::parse(&message.kind)
            .ok_or_else(|| ProtocolError::UnknownKind(message.kind.clone()))?;

        let payload_err = |source: serde_json::Error| ProtocolError::Payload { kind, source };

        Ok(match kind {
            StreamMessageKind::Load => {
                StreamEvent::Load(serde_json::from_value(message.object).map_err(payload_err)?)
            }
            StreamMessageKind::Create => {
                StreamEvent::Create(serde_json::from_value(message.object).map_err(payload_err)?)
            }
            StreamMessageKind::Delete => {
                StreamEvent::Delete(serde_json::from_value(message.object).map_err(payload_err)?)
            }
            StreamMessageKind::Error => StreamEvent::Error(message.object),
        })
    }
}
