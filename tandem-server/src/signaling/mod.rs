mod matchmaking_service;
mod server;
mod ws_handler;

pub use matchmaking_service::*;
pub use server::*;
pub use ws_handler::*;
