//! Podium - embedded leaderboard engine with versioned block snapshots
//!
//! Customers accumulate a decimal score through bounded deltas; customers
//! with positive score are ranked ascending by (score, id), ties broken by
//! ascending id. Range and neighbors queries are served from an immutable
//! block-partitioned snapshot, so reads never walk the live index.
//!
//! # Quick Start
//!
//! ```
//! use podium::{Leaderboard, Score};
//!
//! let board = Leaderboard::new();
//! board.record_score(42, Score::from(100))?;
//! board.record_score(7, Score::from(250))?;
//!
//! let top = board.rank_range(1, 10)?;
//! assert_eq!(top[0].customer_id, 42); // lowest score ranks first
//! assert_eq!(top[0].rank, 1);
//!
//! let around = board.neighbors_of(7, 1, 1)?;
//! assert_eq!(around.len(), 2);
//! # Ok::<(), podium::Error>(())
//! ```
//!
//! # Architecture
//!
//! The engine is a two-level structure: a concurrent customer store
//! (authoritative id → score map) plus an ordered ranked index, with reads
//! served from a versioned block snapshot rebuilt inside the write critical
//! section. Construct one [`Leaderboard`] per logical leaderboard; all
//! locking is per-instance.

// Re-export the public API from podium-engine
pub use podium_engine::*;
