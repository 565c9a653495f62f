mod config;
mod error;
mod matchmaking;
mod registry;
mod routing;
mod signaling;

pub use config::*;
pub use error::*;
pub use matchmaking::*;
pub use registry::*;
pub use routing::*;
pub use signaling::*;
