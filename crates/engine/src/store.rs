//! Authoritative customer store
//!
//! Maps customer identity to its current cumulative score. This is a leaf
//! component with no ordering knowledge: repositioning in the ranked index
//! is the write path's job, and the write path holds the exclusive lock
//! around any `upsert_delta` that can change ranked membership.
//!
//! The map itself is a `DashMap`, so pure lookups (existence checks, score
//! reads) never take the engine lock.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use podium_core::{Customer, CustomerId, Score};

/// Outcome of applying a delta to a customer's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaOutcome {
    /// Score before the delta (zero for a newly created customer)
    pub previous: Score,
    /// Score after the delta
    pub current: Score,
    /// Whether the customer existed before this call
    pub existed: bool,
}

/// Concurrent map from customer id to customer
#[derive(Debug, Default)]
pub struct CustomerStore {
    customers: DashMap<CustomerId, Customer>,
}

impl CustomerStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
        }
    }

    /// Apply a score delta, creating the customer if absent
    ///
    /// - Absent id: the delta becomes the customer's first recorded score
    ///   (a zero delta creates an unranked customer with score 0).
    /// - Present id, zero delta: returns the current score unchanged.
    /// - Present id, non-zero delta: accumulates.
    ///
    /// Range validation is the caller's responsibility; any delta is
    /// accepted here.
    pub fn upsert_delta(&self, customer_id: CustomerId, delta: Score) -> DeltaOutcome {
        match self.customers.entry(customer_id) {
            Entry::Occupied(mut occupied) => {
                let previous = occupied.get().score;
                if delta.is_zero() {
                    return DeltaOutcome {
                        previous,
                        current: previous,
                        existed: true,
                    };
                }
                let current = previous + delta;
                occupied.get_mut().score = current;
                DeltaOutcome {
                    previous,
                    current,
                    existed: true,
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Customer::new(customer_id, delta));
                DeltaOutcome {
                    previous: Score::ZERO,
                    current: delta,
                    existed: false,
                }
            }
        }
    }

    /// Look up a customer by id
    pub fn get(&self, customer_id: CustomerId) -> Option<Customer> {
        self.customers.get(&customer_id).map(|entry| *entry.value())
    }

    /// Number of customers, ranked or not
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the store holds no customers
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
