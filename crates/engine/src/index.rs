//! Ordered ranked index
//!
//! A `BTreeMap` keyed by `RankedKey` holding only customers whose score is
//! currently positive. The map is the live ordering authority; rank
//! *positions* are never computed against it directly (a B-tree has no
//! cheap positional indexing) but against the materialized block snapshot.
//!
//! Membership invariant: a customer with score <= 0 has no key here; a
//! customer with score > 0 has exactly one.

use podium_core::{CustomerId, RankedKey, Score};
use std::collections::BTreeMap;

/// Totally-ordered index of (score, id) keys for positive-score customers
#[derive(Debug, Default)]
pub struct RankedIndex {
    entries: BTreeMap<RankedKey, CustomerId>,
}

impl RankedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a ranked key
    pub fn insert(&mut self, key: RankedKey) {
        self.entries.insert(key, key.customer_id);
    }

    /// Remove a ranked key
    pub fn remove(&mut self, key: &RankedKey) {
        self.entries.remove(key);
    }

    /// Move a customer to the position of its new score
    ///
    /// Removes the old key when the previous score was positive, inserts a
    /// new key when the new score is positive. A positive-to-non-positive
    /// transition therefore drops the customer from the index entirely
    /// (it stays in the customer store).
    pub fn reposition(&mut self, customer_id: CustomerId, previous: Score, current: Score) {
        if previous > Score::ZERO {
            self.remove(&RankedKey::new(previous, customer_id));
        }
        if current > Score::ZERO {
            self.insert(RankedKey::new(current, customer_id));
        }
    }

    /// Whether a key is present
    pub fn contains(&self, key: &RankedKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of ranked customers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ranked set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialize the full ordered key sequence
    ///
    /// This is the snapshot rebuild input: O(n), ascending ranked-key order.
    pub fn to_ordered_keys(&self) -> Vec<RankedKey> {
        self.entries.keys().copied().collect()
    }
}
