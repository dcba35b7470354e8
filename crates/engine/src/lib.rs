//! Podium leaderboard engine
//!
//! Three collaborating components, leaf-first:
//!
//! - [`CustomerStore`] — authoritative id → score map (no ordering
//!   knowledge)
//! - [`RankedIndex`] — ordered (score, id) index over positive-score
//!   customers
//! - [`BlockSnapshot`] — versioned block-partitioned read snapshot of the
//!   index's iteration order
//!
//! [`Leaderboard`] wires them together behind a per-instance reader/writer
//! lock and exposes the three engine operations: `record_score`,
//! `rank_range`, and `neighbors_of`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod leaderboard;
pub mod snapshot;
pub mod store;

pub use index::RankedIndex;
pub use leaderboard::Leaderboard;
pub use snapshot::{BlockSnapshot, DEFAULT_BLOCK_SIZE};
pub use store::{CustomerStore, DeltaOutcome};

// Re-export the core vocabulary so engine users need a single import
pub use podium_core::{
    Customer, CustomerId, DeltaLimits, Error, RankedEntry, RankedKey, Result, Score,
};
