use std::collections::{HashMap, VecDeque};
use tandem_core::ClientId;

/// Stale queue entries tolerated before the queue is compacted.
const COMPACT_SLACK: usize = 32;

/// FIFO of clients that asked for a partner and have none yet.
///
/// Membership lives in `index`, keyed by id with the sequence number of the
/// id's live queue entry. Removal only drops the index entry; the queue slot
/// goes stale and is skipped when popped, so every operation is O(1)
/// amortized.
#[derive(Debug, Default)]
pub struct WaitingPool {
    queue: VecDeque<(ClientId, u64)>,
    index: HashMap<ClientId, u64>,
    next_seq: u64,
}

impl WaitingPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it is already queued. Returns whether it was added.
    pub fn push(&mut self, id: ClientId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(id, seq);
        self.queue.push_back((id, seq));
        true
    }

    /// Removes and returns the earliest-inserted id.
    pub fn pop_earliest(&mut self) -> Option<ClientId> {
        while let Some((id, seq)) = self.queue.pop_front() {
            if self.index.get(&id) == Some(&seq) {
                self.index.remove(&id);
                return Some(id);
            }
        }
        None
    }

    /// Removes `id` wherever it sits. Absent ids are fine.
    pub fn remove(&mut self, id: &ClientId) -> bool {
        if self.index.remove(id).is_none() {
            return false;
        }
        if self.queue.len() > 2 * self.index.len() + COMPACT_SLACK {
            let index = &self.index;
            self.queue.retain(|(id, seq)| index.get(id) == Some(seq));
        }
        true
    }

    pub fn contains(&self, id: &ClientId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Live entries, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &ClientId> {
        self.queue
            .iter()
            .filter(|(id, seq)| self.index.get(id) == Some(seq))
            .map(|(id, _)| id)
    }
}
