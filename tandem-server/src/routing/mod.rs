mod content_filter;
mod message_router;

pub use content_filter::*;
pub use message_router::*;
