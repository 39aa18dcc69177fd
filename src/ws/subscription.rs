//! Per-connection subscription manager.
//!
//! Tracks which raffles a WebSocket client is subscribed to and provides
//! server-side event filtering.

use std::collections::HashSet;

use crate::domain::RaffleId;

/// Manages the set of raffle subscriptions for a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed raffle IDs. If `subscribe_all` is true, this set is ignored.
    raffle_ids: HashSet<RaffleId>,
    /// Whether the client subscribes to all raffles (wildcard `"*"`).
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds raffle IDs to the subscription set. `"*"` enables the wildcard.
    pub fn subscribe(&mut self, ids: &[RaffleId], wildcard: bool) {
        if wildcard {
            self.subscribe_all = true;
        }
        for id in ids {
            self.raffle_ids.insert(*id);
        }
    }

    /// Removes raffle IDs from the subscription set.
    pub fn unsubscribe(&mut self, ids: &[RaffleId]) {
        for id in ids {
            self.raffle_ids.remove(id);
        }
    }

    /// Returns `true` if the given raffle ID matches the subscription filter.
    #[must_use]
    pub fn matches(&self, raffle_id: RaffleId) -> bool {
        self.subscribe_all || self.raffle_ids.contains(&raffle_id)
    }

    /// Returns the number of explicitly subscribed raffle IDs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.raffle_ids.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_matches_nothing() {
        let mgr = SubscriptionManager::new();
        assert!(!mgr.matches(RaffleId::new()));
    }

    #[test]
    fn subscribe_specific_raffle() {
        let mut mgr = SubscriptionManager::new();
        let id = RaffleId::new();
        mgr.subscribe(&[id], false);
        assert!(mgr.matches(id));
        assert!(!mgr.matches(RaffleId::new()));
    }

    #[test]
    fn wildcard_matches_everything() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&[], true);
        assert!(mgr.matches(RaffleId::new()));
        assert!(mgr.matches(RaffleId::new()));
    }

    #[test]
    fn unsubscribe_removes_raffle() {
        let mut mgr = SubscriptionManager::new();
        let id = RaffleId::new();
        mgr.subscribe(&[id], false);
        assert!(mgr.matches(id));
        mgr.unsubscribe(&[id]);
        assert!(!mgr.matches(id));
    }

    #[test]
    fn count_tracks_explicit() {
        let mut mgr = SubscriptionManager::new();
        assert_eq!(mgr.count(), 0);
        mgr.subscribe(&[RaffleId::new(), RaffleId::new()], false);
        assert_eq!(mgr.count(), 2);
    }
}
