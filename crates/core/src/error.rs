//! Error types for the leaderboard engine
//!
//! All errors indicate caller misuse rather than transient failure: every
//! failing operation aborts before touching any state, so there is never a
//! partial mutation to recover from. We use `thiserror` for automatic
//! `Display` and `Error` trait implementations.
//!
//! The transport layer is expected to map `ScoreOutOfRange` and
//! `InvalidRankRange` to a client-error status and `CustomerNotFound` to a
//! not-found status, passing the message through unmodified.

use crate::types::{CustomerId, Score};
use thiserror::Error;

/// Result type alias for leaderboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the leaderboard engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A score delta outside the accepted per-write range
    #[error("score delta {delta} is out of range, valid value is between {min} and {max}")]
    ScoreOutOfRange {
        /// The rejected delta
        delta: Score,
        /// Inclusive lower bound
        min: Score,
        /// Inclusive upper bound
        max: Score,
    },

    /// Malformed rank-range bounds (non-positive or inverted)
    #[error("invalid rank range [{start}, {end}]: bounds must be >= 1 and start <= end")]
    InvalidRankRange {
        /// Requested 1-based start rank
        start: i64,
        /// Requested 1-based end rank
        end: i64,
    },

    /// The queried customer does not exist or has no positive score
    #[error("no ranked customer found for customer id {0}")]
    CustomerNotFound(CustomerId),
}
