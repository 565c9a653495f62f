use crate::model::error::ProtocolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelopes a client may send to the server.
///
/// Negotiation payloads (`sdp`, `candidate`) are kept as raw JSON and never
/// inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    FindPartner,
    VideoOffer { sdp: Value },
    VideoAnswer { sdp: Value },
    IceCandidate { candidate: Value },
    ChatMessage { message: String },
}

impl ClientMessage {
    const KNOWN_TYPES: [&'static str; 5] = [
        "find_partner",
        "video_offer",
        "video_answer",
        "ice_candidate",
        "chat_message",
    ];

    /// Parses one inbound text frame.
    ///
    /// An unrecognised `type` is reported separately from a frame that is not
    /// an envelope at all, so the sender gets a useful error.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text).map_err(|_| ProtocolError::Malformed)?;

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::Malformed)?;

        if !Self::KNOWN_TYPES.contains(&kind) {
            return Err(ProtocolError::UnknownType(kind.to_owned()));
        }

        serde_json::from_value(value).map_err(|_| ProtocolError::Malformed)
    }
}

/// Envelopes the server sends to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Waiting,
    PartnerFound,
    VideoOffer { sdp: Value },
    VideoAnswer { sdp: Value },
    IceCandidate { candidate: Value },
    ChatMessage { message: String },
    PartnerDisconnected,
    Error { message: String },
}

impl ServerMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
