//! Identity, score, and ordering types for the leaderboard
//!
//! The ordering defined here is the single source of truth for rank
//! computation: `RankedKey` sorts by score ascending, with ties broken by
//! ascending customer id. Rank 1 is therefore the lowest positive score.
//! That direction matches the observed behavior of the system this engine
//! replaces; it is deliberate, not an accident of derive order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Externally supplied unique customer identifier
pub type CustomerId = i64;

/// Cumulative customer score
///
/// Fixed-point decimal so that repeated accumulation is exact. Scores are
/// unbounded in magnitude; only per-write deltas are range-checked.
pub type Score = Decimal;

/// Sort key for the ranked index: score ascending, ties by ascending id
///
/// The derived `Ord` is lexicographic over the field order, which encodes
/// exactly the comparison rule above. Field order is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankedKey {
    /// Cumulative score at the time the key was inserted
    pub score: Score,
    /// Tie-break: lower id ranks first among equal scores
    pub customer_id: CustomerId,
}

impl RankedKey {
    /// Create a ranked key for a customer at a given score
    pub fn new(score: Score, customer_id: CustomerId) -> Self {
        Self { score, customer_id }
    }
}

/// A customer and its current cumulative score
///
/// Owned exclusively by the customer store; the ranked index and snapshots
/// hold `RankedKey` copies, never the customer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    /// Unique identity
    pub customer_id: CustomerId,
    /// Current cumulative score
    pub score: Score,
}

impl Customer {
    /// Create a customer with an initial score
    pub fn new(customer_id: CustomerId, score: Score) -> Self {
        Self { customer_id, score }
    }

    /// Whether this customer participates in ranking (score > 0)
    pub fn is_ranked(&self) -> bool {
        self.score > Decimal::ZERO
    }

    /// The key this customer occupies in the ranked index, if ranked
    pub fn ranked_key(&self) -> RankedKey {
        RankedKey::new(self.score, self.customer_id)
    }
}

/// One row of a rank query response
///
/// `rank` is the 1-based position in ascending ranked-key order, restricted
/// to customers with positive score. Serializable so the transport layer can
/// emit it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Customer identity
    pub customer_id: CustomerId,
    /// Score at the time the snapshot was published
    pub score: Score,
    /// 1-based rank (global 0-based index + 1)
    pub rank: u64,
}
