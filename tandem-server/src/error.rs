use tandem_core::ClientId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// No live connection for this id: never registered, already
    /// unregistered, or its outbound channel has closed.
    #[error("client {0} is not connected")]
    NotFound(ClientId),

    #[error("failed to encode envelope: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
