use crate::error::ServerError;
use crate::registry::ClientHandle;
use dashmap::DashMap;
use tandem_core::{ClientId, ServerMessage};
use tracing::error;

/// Live connections indexed by id. Holds no pairing state.
#[derive(Default)]
pub struct ConnectionRegistry {
    clients: DashMap<ClientId, ClientHandle>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the handle under a freshly generated id.
    pub fn register(&self, handle: ClientHandle) -> ClientId {
        let id = ClientId::new();
        self.clients.insert(id, handle);
        id
    }

    pub fn lookup(&self, id: &ClientId) -> Result<ClientHandle, ServerError> {
        self.clients
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(ServerError::NotFound(*id))
    }

    pub fn unregister(&self, id: &ClientId) -> Option<ClientHandle> {
        self.clients.remove(id).map(|(_, handle)| handle)
    }

    /// Registered and its writer still running.
    pub fn is_live(&self, id: &ClientId) -> bool {
        self.clients
            .get(id)
            .is_some_and(|entry| !entry.value().is_closed())
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Enqueues an already-encoded frame for `id`.
    ///
    /// A missing entry and a closed channel are both reported as
    /// [`ServerError::NotFound`].
    pub fn send_raw(&self, id: &ClientId, text: String) -> Result<(), ServerError> {
        let handle = self.lookup(id)?;
        if handle.send_text(text) {
            Ok(())
        } else {
            Err(ServerError::NotFound(*id))
        }
    }

    pub fn send(&self, id: &ClientId, msg: &ServerMessage) -> Result<(), ServerError> {
        let json = msg.to_json().inspect_err(|e| {
            error!("Failed to serialize server message: {}", e);
        })?;
        self.send_raw(id, json)
    }
}
