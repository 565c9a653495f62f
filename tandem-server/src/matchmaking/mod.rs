mod client_state;
mod matchmaker;
mod pairing_table;
mod waiting_pool;

pub use client_state::*;
pub use matchmaker::*;
pub use pairing_table::*;
pub use waiting_pool::*;
