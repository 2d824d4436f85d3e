use serde::{Deserialize, Serialize};

/// Sub-protocol tag carried by every CRUD request (`"bzn-api": "crud"`).
pub const CRUD_API: &str = "crud";

/// Sub-protocol tag carried by every ping message (`"bzn-api": "ping"`).
pub const PING_API: &str = "ping";

/// The CRUD operation kind, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cmd {
    /// Create a key with a value.
    Create,
    /// Read the value of a key.
    Read,
    /// Update an existing key with a new value.
    Update,
    /// Delete a key.
    Delete,
}

/// Command-specific payload of a CRUD request.
///
/// `value` is present for create/update and omitted entirely for
/// read/delete, matching the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// The key the command applies to.
    pub key: String,
    /// Base64-encoded value, only for create/update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Payload {
    /// Payload for a command carrying only a key (read/delete).
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Payload for a command carrying a key and an already-encoded value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

/// A CRUD request envelope.
///
/// Field names (`bzn-api`, `db_uuid`, `cmd`, `request-id`, `data`) and
/// their declaration order are part of the wire contract. Requests are
/// immutable value objects: constructed once, serialized, discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Constant sub-protocol tag, always `"crud"`.
    #[serde(rename = "bzn-api")]
    pub api: String,
    /// Identifier of the user/database scope the command applies to.
    pub db_uuid: String,
    /// The operation kind.
    pub cmd: Cmd,
    /// Caller-assigned correlation number; uniqueness is not enforced.
    #[serde(rename = "request-id")]
    pub request_id: u64,
    /// Command-specific payload.
    pub data: Payload,
}

impl Request {
    /// Assembles a request envelope around a payload.
    pub fn new(request_id: u64, db_uuid: impl Into<String>, cmd: Cmd, data: Payload) -> Self {
        Self {
            api: CRUD_API.to_owned(),
            db_uuid: db_uuid.into(),
            cmd,
            request_id,
            data,
        }
    }
}

/// A ping message: same envelope shape as [`Request`] but a separate
/// protocol namespace, carrying only a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingMessage {
    /// Constant sub-protocol tag, always `"ping"`.
    #[serde(rename = "bzn-api")]
    pub api: String,
    /// Sequence index, 0-based.
    pub data: u64,
}

impl PingMessage {
    /// Builds the ping message for sequence index `seq`.
    pub fn new(seq: u64) -> Self {
        Self {
            api: PING_API.to_owned(),
            data: seq,
        }
    }
}
