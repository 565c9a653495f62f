use std::collections::HashMap;
use tandem_core::ClientId;

/// Symmetric partner map: `partner_of(a) == Some(b)` iff `partner_of(b) == Some(a)`.
///
/// Both directions are only ever written together.
#[derive(Debug, Default)]
pub struct PairingTable {
    partners: HashMap<ClientId, ClientId>,
}

impl PairingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callers must ensure neither side is already paired.
    pub fn pair(&mut self, a: ClientId, b: ClientId) {
        debug_assert!(a != b, "a client cannot pair with itself");
        debug_assert!(!self.partners.contains_key(&a) && !self.partners.contains_key(&b));
        self.partners.insert(a, b);
        self.partners.insert(b, a);
    }

    pub fn partner_of(&self, id: &ClientId) -> Option<ClientId> {
        self.partners.get(id).copied()
    }

    /// Removes both directions of `id`'s pairing and returns the former partner.
    pub fn unpair(&mut self, id: &ClientId) -> Option<ClientId> {
        let partner = self.partners.remove(id)?;
        self.partners.remove(&partner);
        Some(partner)
    }

    pub fn contains(&self, id: &ClientId) -> bool {
        self.partners.contains_key(id)
    }

    /// Number of pairs, not entries.
    pub fn len(&self) -> usize {
        self.partners.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Each pair once, lower id first.
    pub fn pairs(&self) -> Vec<(ClientId, ClientId)> {
        self.partners
            .iter()
            .filter(|(a, b)| a.0 < b.0)
            .map(|(a, b)| (*a, *b))
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.partners
            .iter()
            .all(|(a, b)| self.partners.get(b) == Some(a))
    }
}
