use tandem_core::ClientId;

/// Where a client currently stands in the pairing lifecycle.
///
/// `Idle -> Waiting -> Paired -> Idle -> ...`; `Disconnected` is terminal and
/// reachable from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Idle,
    Waiting,
    Paired(ClientId),
    Disconnected,
}

/// Result of a `find_partner` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingOutcome {
    /// Took the earliest waiting client as partner.
    Matched { partner: ClientId },
    /// Pool was empty; the requester now waits.
    Enqueued,
    /// Duplicate request while waiting. `waiting` was re-sent.
    AlreadyWaiting,
    /// Duplicate request while paired. `partner_found` was re-sent.
    AlreadyPaired { partner: ClientId },
    /// The requester was already torn down; nothing changed.
    RequesterGone,
}
