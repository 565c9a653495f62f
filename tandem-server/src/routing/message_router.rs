use crate::error::ServerError;
use crate::matchmaking::{Matchmaker, PairingOutcome};
use crate::registry::ConnectionRegistry;
use crate::routing::ContentFilter;
use std::sync::Arc;
use tandem_core::{ClientId, ClientMessage, ProtocolError, ServerMessage};
use tracing::{debug, error, warn};

/// What happened to one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Pairing(PairingOutcome),
    Relayed { to: ClientId },
    /// Negotiation or chat from a client without a partner; dropped.
    Unpaired,
    /// The partner's connection closed before delivery; dropped.
    PartnerGone { partner: ClientId },
    /// Sender was sent an `error` envelope.
    Rejected(ProtocolError),
    EncodeFailed,
}

/// Dispatches inbound envelopes by type.
pub struct MessageRouter {
    registry: Arc<ConnectionRegistry>,
    matchmaker: Arc<Matchmaker>,
    filter: ContentFilter,
}

impl MessageRouter {
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        matchmaker: Arc<Matchmaker>,
        filter: ContentFilter,
    ) -> Self {
        Self {
            registry,
            matchmaker,
            filter,
        }
    }

    pub async fn route(&self, sender: ClientId, text: &str) -> RouteOutcome {
        let msg = match ClientMessage::decode(text) {
            Ok(msg) => msg,
            Err(e) => return self.reject(sender, e),
        };

        match msg {
            ClientMessage::FindPartner => {
                RouteOutcome::Pairing(self.matchmaker.request_pairing(sender).await)
            }

            // forwarded as received, byte for byte
            ClientMessage::VideoOffer { .. }
            | ClientMessage::VideoAnswer { .. }
            | ClientMessage::IceCandidate { .. } => self.relay(sender, text.to_owned()).await,

            ClientMessage::ChatMessage { message } => {
                let filtered = ServerMessage::ChatMessage {
                    message: self.filter.apply(&message),
                };
                match filtered.to_json() {
                    Ok(json) => self.relay(sender, json).await,
                    Err(e) => {
                        error!("Failed to encode chat message from {}: {}", sender, e);
                        RouteOutcome::EncodeFailed
                    }
                }
            }
        }
    }

    /// Answers the sender alone with an `error` envelope. Shared state is not
    /// touched and the connection stays open.
    pub fn reject(&self, sender: ClientId, err: ProtocolError) -> RouteOutcome {
        warn!("Protocol error from {}: {}", sender, err);

        let reply = ServerMessage::Error {
            message: err.to_string(),
        };
        if let Err(e) = self.registry.send(&sender, &reply) {
            debug!("Could not report error to {}: {}", sender, e);
        }
        RouteOutcome::Rejected(err)
    }

    async fn relay(&self, sender: ClientId, frame: String) -> RouteOutcome {
        let Some(partner) = self.matchmaker.partner_of(&sender).await else {
            debug!("Dropping relay from unpaired client {}", sender);
            return RouteOutcome::Unpaired;
        };

        match self.registry.send_raw(&partner, frame) {
            Ok(()) => RouteOutcome::Relayed { to: partner },
            Err(ServerError::NotFound(_)) => {
                debug!("Partner {} of {} is gone; relay dropped", partner, sender);
                RouteOutcome::PartnerGone { partner }
            }
            Err(e) => {
                warn!("Relay from {} to {} failed: {}", sender, partner, e);
                RouteOutcome::PartnerGone { partner }
            }
        }
    }
}
