pub mod model;

pub use model::{ClientId, ClientMessage, ProtocolError, ServerMessage};
