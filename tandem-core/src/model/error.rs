use thiserror::Error;

/// Why an inbound frame could not be turned into a [`ClientMessage`](crate::ClientMessage).
///
/// The `Display` text is what the sender receives in its `error` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Invalid message format")]
    Malformed,

    #[error("Unknown message type: {0}")]
    UnknownType(String),
}
