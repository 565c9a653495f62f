use crate::matchmaking::{ClientState, Matchmaker};
use crate::registry::{ClientHandle, ConnectionRegistry};
use crate::routing::{ContentFilter, MessageRouter, RouteOutcome};
use std::sync::Arc;
use tandem_core::{ClientId, ProtocolError};
use tracing::info;

struct ServiceInner {
    registry: Arc<ConnectionRegistry>,
    matchmaker: Arc<Matchmaker>,
    router: MessageRouter,
}

/// Everything a connection handler needs, built once at startup and cloned
/// into each connection.
#[derive(Clone)]
pub struct MatchmakingService {
    inner: Arc<ServiceInner>,
}

impl MatchmakingService {
    pub fn new(filter: ContentFilter) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let matchmaker = Arc::new(Matchmaker::new(registry.clone()));
        let router = MessageRouter::new(registry.clone(), matchmaker.clone(), filter);

        Self {
            inner: Arc::new(ServiceInner {
                registry,
                matchmaker,
                router,
            }),
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.inner.registry
    }

    pub fn matchmaker(&self) -> &Matchmaker {
        &self.inner.matchmaker
    }

    /// Registers a new connection; it starts idle.
    pub fn connect(&self, handle: ClientHandle) -> ClientId {
        let id = self.inner.registry.register(handle);
        info!("Client connected: {} ({} online)", id, self.inner.registry.len());
        id
    }

    pub async fn handle_text(&self, id: ClientId, text: &str) -> RouteOutcome {
        self.inner.router.route(id, text).await
    }

    /// Used for frames that never made it to text, e.g. non-UTF-8 binary.
    pub fn reject(&self, id: ClientId, err: ProtocolError) -> RouteOutcome {
        self.inner.router.reject(id, err)
    }

    /// Tears down pairing state first, then forgets the connection.
    pub async fn disconnect(&self, id: ClientId) {
        self.inner.matchmaker.disconnect(id).await;
        self.inner.registry.unregister(&id);
        info!("Client disconnected: {} ({} online)", id, self.inner.registry.len());
    }

    pub async fn client_state(&self, id: &ClientId) -> ClientState {
        if self.inner.registry.lookup(id).is_err() {
            return ClientState::Disconnected;
        }
        self.inner.matchmaker.state_of(id).await
    }
}

impl Default for MatchmakingService {
    fn default() -> Self {
        Self::new(ContentFilter::default())
    }
}
