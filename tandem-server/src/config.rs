use crate::routing::DEFAULT_BLOCKLIST;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

/// Runtime settings for [`serve`](crate::serve).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Path that accepts WebSocket upgrades.
    pub ws_path: String,
    /// Terms masked in relayed chat text.
    pub blocked_terms: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            ws_path: "/".to_string(),
            blocked_terms: DEFAULT_BLOCKLIST.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Appends extra terms after the fixed blocklist, skipping duplicates.
    pub fn with_extra_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            let term = term.into();
            if !term.is_empty() && !self.blocked_terms.contains(&term) {
                self.blocked_terms.push(term);
            }
        }
        self
    }
}
