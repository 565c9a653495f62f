use crate::matchmaking::{ClientState, PairingOutcome, PairingTable, WaitingPool};
use crate::registry::ConnectionRegistry;
use std::sync::Arc;
use tandem_core::{ClientId, ServerMessage};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct PairingState {
    waiting: WaitingPool,
    pairs: PairingTable,
}

/// Point-in-time copy of the pairing state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingSnapshot {
    /// Waiting ids, earliest first.
    pub waiting: Vec<ClientId>,
    pub pairs: Vec<(ClientId, ClientId)>,
}

impl PairingSnapshot {
    pub fn is_paired(&self, a: &ClientId, b: &ClientId) -> bool {
        self.pairs
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

/// Sole owner and writer of the waiting pool and the pairing table.
///
/// Every pairing decision and teardown runs under one lock, so they are
/// linearized. Notifications are enqueued on the clients' outbound channels
/// while the lock is held; that never blocks and keeps the order clients
/// observe consistent with the order decisions were made.
pub struct Matchmaker {
    state: Mutex<PairingState>,
    registry: Arc<ConnectionRegistry>,
}

impl Matchmaker {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self {
            state: Mutex::new(PairingState::default()),
            registry,
        }
    }

    pub async fn request_pairing(&self, id: ClientId) -> PairingOutcome {
        let mut state = self.state.lock().await;

        if !self.registry.is_live(&id) {
            debug!("Ignoring find_partner from torn-down client {}", id);
            return PairingOutcome::RequesterGone;
        }

        if let Some(partner) = state.pairs.partner_of(&id) {
            debug!("Duplicate find_partner from paired client {}", id);
            self.notify(&id, &ServerMessage::PartnerFound);
            return PairingOutcome::AlreadyPaired { partner };
        }

        if state.waiting.contains(&id) {
            debug!("Duplicate find_partner from waiting client {}", id);
            self.notify(&id, &ServerMessage::Waiting);
            return PairingOutcome::AlreadyWaiting;
        }

        while let Some(partner) = state.waiting.pop_earliest() {
            if !self.registry.is_live(&partner) {
                debug!("Skipping waiting client {} with a closed connection", partner);
                continue;
            }

            state.pairs.pair(id, partner);
            info!("Paired {} with {}", id, partner);

            self.notify(&id, &ServerMessage::PartnerFound);
            self.notify(&partner, &ServerMessage::PartnerFound);
            return PairingOutcome::Matched { partner };
        }

        state.waiting.push(id);
        info!("Client {} is waiting for a partner", id);
        self.notify(&id, &ServerMessage::Waiting);
        PairingOutcome::Enqueued
    }

    /// Drops `id` from the pool and dissolves its pairing, if any.
    ///
    /// The former partner goes back to idle and is told about it; it is not
    /// requeued. Returns that partner. Safe to call more than once.
    pub async fn disconnect(&self, id: ClientId) -> Option<ClientId> {
        let mut state = self.state.lock().await;

        if state.waiting.remove(&id) {
            debug!("Removed {} from the waiting pool", id);
        }

        let partner = state.pairs.unpair(&id)?;
        info!("Pair {} / {} dissolved by disconnect", id, partner);
        self.notify(&partner, &ServerMessage::PartnerDisconnected);
        Some(partner)
    }

    pub async fn partner_of(&self, id: &ClientId) -> Option<ClientId> {
        self.state.lock().await.pairs.partner_of(id)
    }

    /// Pairing-side view only; it cannot tell an idle client from one that
    /// was never registered.
    pub async fn state_of(&self, id: &ClientId) -> ClientState {
        let state = self.state.lock().await;
        if let Some(partner) = state.pairs.partner_of(id) {
            ClientState::Paired(partner)
        } else if state.waiting.contains(id) {
            ClientState::Waiting
        } else {
            ClientState::Idle
        }
    }

    pub async fn waiting_len(&self) -> usize {
        self.state.lock().await.waiting.len()
    }

    pub async fn snapshot(&self) -> PairingSnapshot {
        let state = self.state.lock().await;
        PairingSnapshot {
            waiting: state.waiting.iter().copied().collect(),
            pairs: state.pairs.pairs(),
        }
    }

    /// Checks that the table is symmetric and that no id both waits and is
    /// paired.
    pub async fn invariants_hold(&self) -> bool {
        let state = self.state.lock().await;
        state.pairs.is_symmetric() && state.waiting.iter().all(|id| !state.pairs.contains(id))
    }

    fn notify(&self, id: &ClientId, msg: &ServerMessage) {
        if let Err(e) = self.registry.send(id, msg) {
            debug!("Dropping {:?} for {}: {}", msg, id, e);
        }
    }
}
