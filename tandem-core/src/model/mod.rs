mod client;
mod envelope;
mod error;

pub use client::ClientId;
pub use envelope::{ClientMessage, ServerMessage};
pub use error::ProtocolError;
