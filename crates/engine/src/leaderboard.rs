//! Leaderboard engine facade
//!
//! Owns the customer store, the ranked index, and the block snapshot, and
//! enforces the concurrency discipline: one `RwLock` per leaderboard
//! instance guards `{index, snapshot}`, and the whole write sequence
//! (upsert, reposition, version bump, rebuild, publish) is a single
//! exclusive critical section. Readers take the shared lock only to consult
//! the published snapshot; writes are linearized, and a concurrent reader
//! sees either the pre- or post-write snapshot, never a mix.
//!
//! One `Leaderboard` value per logical leaderboard; nothing here is
//! process-global.

use parking_lot::RwLock;
use podium_core::{CustomerId, DeltaLimits, Error, RankedEntry, Result, Score};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::index::RankedIndex;
use crate::snapshot::{BlockSnapshot, DEFAULT_BLOCK_SIZE};
use crate::store::CustomerStore;

/// Live ordering state and its published read snapshot
///
/// Kept under one lock so the index and the snapshot can never be observed
/// out of step with each other.
#[derive(Debug)]
struct RankedState {
    index: RankedIndex,
    snapshot: BlockSnapshot,
}

/// Ranking engine for one logical leaderboard
///
/// Customers accumulate a decimal score; those with positive score are
/// ranked ascending by (score, id). Reads are served from a versioned
/// block snapshot rebuilt inside the write critical section.
#[derive(Debug)]
pub struct Leaderboard {
    customers: CustomerStore,
    limits: DeltaLimits,
    ranked: RwLock<RankedState>,
    /// Bumped once per mutation that changes ranked membership or position
    version: AtomicU64,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Create a leaderboard with the default snapshot block size
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Create a leaderboard with an explicit snapshot block size
    ///
    /// Mainly for tests that want to exercise block boundaries without
    /// thousands of customers.
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            customers: CustomerStore::new(),
            limits: DeltaLimits::default(),
            ranked: RwLock::new(RankedState {
                index: RankedIndex::new(),
                snapshot: BlockSnapshot::new(block_size),
            }),
            version: AtomicU64::new(0),
        }
    }

    /// Apply a score delta to a customer, creating it if absent
    ///
    /// Validates the delta against the engine limits before touching any
    /// state; a rejected delta leaves the leaderboard untouched. A zero
    /// delta never repositions, bumps the version, or rebuilds — it only
    /// creates the customer if it did not exist (score 0, unranked).
    ///
    /// Returns the customer's new cumulative score.
    pub fn record_score(&self, customer_id: CustomerId, delta: Score) -> Result<Score> {
        self.limits.validate(delta)?;

        if delta.is_zero() {
            // No ranked membership or position can change: the store upsert
            // is atomic on its own, so the exclusive lock is not needed.
            let outcome = self.customers.upsert_delta(customer_id, delta);
            return Ok(outcome.current);
        }

        let mut ranked = self.ranked.write();
        let outcome = self.customers.upsert_delta(customer_id, delta);
        ranked
            .index
            .reposition(customer_id, outcome.previous, outcome.current);
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            target: "podium::write",
            customer_id,
            delta = %delta,
            score = %outcome.current,
            version,
            "score recorded"
        );
        self.refresh_snapshot(&mut ranked);
        Ok(outcome.current)
    }

    /// Fetch customers in an inclusive 1-based rank range
    ///
    /// Fails with `InvalidRankRange` when either bound is < 1 or the range
    /// is inverted. A range beyond the ranked set yields an empty list;
    /// `end` is clamped to the ranked count.
    pub fn rank_range(&self, start: i64, end: i64) -> Result<Vec<RankedEntry>> {
        if start < 1 || end < 1 || start > end {
            return Err(Error::InvalidRankRange { start, end });
        }

        let ranked = self.ranked.read();
        Ok(ranked
            .snapshot
            .window((start - 1) as usize, (end - 1) as usize))
    }

    /// Fetch a customer and its ranked neighbors
    ///
    /// `above` asks for positions earlier in the ordering (lower ranks),
    /// `below` for later ones; the window is clamped to the ranked set.
    /// Fails with `CustomerNotFound` when the id is absent or its score is
    /// not positive (unranked customers have no neighbors).
    pub fn neighbors_of(
        &self,
        customer_id: CustomerId,
        above: usize,
        below: usize,
    ) -> Result<Vec<RankedEntry>> {
        // Shared lock first: score reads and the snapshot stay mutually
        // consistent because ranking writes happen under the write lock.
        let ranked = self.ranked.read();

        let customer = self
            .customers
            .get(customer_id)
            .ok_or(Error::CustomerNotFound(customer_id))?;
        if !customer.is_ranked() {
            return Err(Error::CustomerNotFound(customer_id));
        }

        let position = ranked
            .snapshot
            .position_of(&customer.ranked_key())
            .ok_or(Error::CustomerNotFound(customer_id))?;

        let start = position.saturating_sub(above);
        let end = position.saturating_add(below);
        Ok(ranked.snapshot.window(start, end))
    }

    /// Current score of a customer, ranked or not
    pub fn score_of(&self, customer_id: CustomerId) -> Option<Score> {
        self.customers.get(customer_id).map(|c| c.score)
    }

    /// Number of customers with positive score
    pub fn ranked_len(&self) -> usize {
        self.ranked.read().index.len()
    }

    /// Number of customers ever written, ranked or not
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Current mutation version
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Snapshot rebuilds performed so far (metrics)
    pub fn snapshot_rebuild_count(&self) -> u64 {
        self.ranked.read().snapshot.rebuild_count()
    }

    /// Bring the published snapshot up to the current mutation version
    ///
    /// No-op when the recorded snapshot version already matches. Called
    /// inside the write critical section so readers switch atomically from
    /// the old complete block table to the new one.
    fn refresh_snapshot(&self, ranked: &mut RankedState) {
        let version = self.version.load(Ordering::SeqCst);
        if ranked.snapshot.version() == version {
            return;
        }
        if ranked.index.is_empty() {
            ranked.snapshot.clear(version);
            debug!(target: "podium::snapshot", version, "snapshot cleared");
        } else {
            ranked.snapshot.rebuild(version, ranked.index.to_ordered_keys());
            debug!(
                target: "podium::snapshot",
                version,
                ranked = ranked.snapshot.len(),
                "snapshot rebuilt"
            );
        }
    }
}
