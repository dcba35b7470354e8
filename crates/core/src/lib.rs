//! Core types for the Podium leaderboard engine
//!
//! This crate defines the foundational types used throughout the system:
//! - CustomerId / Score: identity and cumulative decimal score
//! - RankedKey: the (score, id) sort key and its ordering rules
//! - Customer / RankedEntry: stored entity and query response row
//! - Error: error type hierarchy
//! - DeltaLimits: per-write delta bounds

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use limits::DeltaLimits;
pub use types::{Customer, CustomerId, RankedEntry, RankedKey, Score};

// Re-exported so downstream crates get Decimal constructors without a
// direct rust_decimal dependency.
pub use rust_decimal::Decimal;
