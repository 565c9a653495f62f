mod client_handle;
mod connection_registry;

pub use client_handle::*;
pub use connection_registry::*;
