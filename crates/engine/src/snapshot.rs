//! Versioned block-partitioned read snapshot
//!
//! The snapshot is an immutable copy of the ranked index's full iteration
//! order, cut into fixed-size blocks. Block number = global 0-based rank /
//! block size, so block addressing is O(1) and a range read touches only
//! its covering blocks.
//!
//! Rebuilds replace the whole block table and record the mutation version
//! they were built at. A refresh at an unchanged version is a no-op; the
//! recorded version is updated at the end of every rebuild and clear so the
//! no-op path is actually reachable (the system this replaces never updated
//! it and rebuilt on every write).
//!
//! Full rebuild per write is a deliberate tradeoff: writes pay O(n) to
//! materialize, reads pay O(block size) per block touched. That suits a
//! read-heavy workload over a modest ranked set; a larger deployment would
//! want incremental block maintenance instead.

use podium_core::{RankedEntry, RankedKey};
use std::sync::Arc;

/// Number of ranked keys per snapshot block
pub const DEFAULT_BLOCK_SIZE: usize = 1000;

/// Immutable, versioned block partition of the ranked sequence
///
/// Blocks are held behind `Arc` so a future handle-style reader could keep
/// a block alive past a rebuild without copying it.
#[derive(Debug)]
pub struct BlockSnapshot {
    /// Mutation version this snapshot was built at
    version: u64,
    /// Fixed block capacity (only the last block may be shorter)
    block_size: usize,
    /// Contiguous runs of ranked keys, ascending
    blocks: Vec<Arc<[RankedKey]>>,
    /// Total ranked keys across all blocks
    total: usize,
    /// Rebuilds performed since creation (metrics; clears not counted)
    rebuilds: u64,
}

impl BlockSnapshot {
    /// Create an empty snapshot at version 0
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be positive");
        Self {
            version: 0,
            block_size,
            blocks: Vec::new(),
            total: 0,
            rebuilds: 0,
        }
    }

    /// The mutation version recorded at the last rebuild or clear
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total number of ranked keys in the snapshot
    pub fn len(&self) -> usize {
        self.total
    }

    /// Whether the snapshot holds no ranked keys
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of full rebuilds performed
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Replace the block table with a freshly materialized key sequence
    ///
    /// `keys` must already be in ascending ranked-key order (the ranked
    /// index's iteration order). Records `version` so the caller's
    /// version-equality skip-check fires on the next unchanged refresh.
    pub fn rebuild(&mut self, version: u64, keys: Vec<RankedKey>) {
        self.total = keys.len();
        self.blocks = keys.chunks(self.block_size).map(Arc::from).collect();
        self.version = version;
        self.rebuilds += 1;
    }

    /// Drop all blocks (ranked set became empty) and record the version
    pub fn clear(&mut self, version: u64) {
        self.blocks.clear();
        self.total = 0;
        self.version = version;
    }

    /// Locate a ranked key's global 0-based position
    ///
    /// Blocks are internally ordered and mutually disjoint, so this is a
    /// partition-point over block bounds followed by a binary search inside
    /// the one candidate block.
    pub fn position_of(&self, key: &RankedKey) -> Option<usize> {
        let block_no = self
            .blocks
            .partition_point(|block| block.last().map_or(false, |last| last < key));
        let block = self.blocks.get(block_no)?;
        let offset = block.binary_search(key).ok()?;
        Some(block_no * self.block_size + offset)
    }

    /// Materialize entries for an inclusive global index window
    ///
    /// Walks only the covering blocks. `end` is clamped to the last ranked
    /// position; an empty or inverted window yields an empty vec. Ranks in
    /// the output are 1-based (global index + 1).
    pub fn window(&self, start: usize, end: usize) -> Vec<RankedEntry> {
        if self.total == 0 || start >= self.total || start > end {
            return Vec::new();
        }
        let end = end.min(self.total - 1);

        let mut entries = Vec::with_capacity(end - start + 1);
        let first_block = start / self.block_size;
        let last_block = end / self.block_size;
        for block_no in first_block..=last_block {
            let block = &self.blocks[block_no];
            let base = block_no * self.block_size;
            let lo = start.saturating_sub(base);
            let hi = (end - base).min(block.len() - 1);
            for (offset, key) in block[lo..=hi].iter().enumerate() {
                entries.push(RankedEntry {
                    customer_id: key.customer_id,
                    score: key.score,
                    rank: (base + lo + offset + 1) as u64,
                });
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::Score;

    static_assertions::assert_impl_all!(BlockSnapshot: Send, Sync);

    fn keys(scores: &[i64]) -> Vec<RankedKey> {
        scores
            .iter()
            .enumerate()
            .map(|(id, &score)| RankedKey::new(Score::from(score), id as i64))
            .collect()
    }

    // ========================================
    // Partitioning
    // ========================================

    #[test]
    fn test_rebuild_partitions_into_blocks() {
        let mut snapshot = BlockSnapshot::new(3);
        snapshot.rebuild(1, keys(&[1, 2, 3, 4, 5, 6, 7]));

        assert_eq!(snapshot.len(), 7);
        assert_eq!(snapshot.blocks.len(), 3);
        assert_eq!(snapshot.blocks[0].len(), 3);
        assert_eq!(snapshot.blocks[2].len(), 1);
    }

    #[test]
    fn test_rebuild_records_version() {
        let mut snapshot = BlockSnapshot::new(3);
        assert_eq!(snapshot.version(), 0);
        snapshot.rebuild(42, keys(&[1]));
        assert_eq!(snapshot.version(), 42);
        assert_eq!(snapshot.rebuild_count(), 1);
    }

    #[test]
    fn test_clear_drops_blocks_and_records_version() {
        let mut snapshot = BlockSnapshot::new(3);
        snapshot.rebuild(1, keys(&[1, 2, 3, 4]));
        snapshot.clear(2);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.version(), 2);
        assert_eq!(snapshot.window(0, 10), Vec::new());
    }

    // ========================================
    // Window extraction
    // ========================================

    #[test]
    fn test_window_within_single_block() {
        let mut snapshot = BlockSnapshot::new(10);
        snapshot.rebuild(1, keys(&[10, 20, 30, 40, 50]));

        let entries = snapshot.window(1, 3);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].rank, 2);
        assert_eq!(entries[0].score, Score::from(20));
        assert_eq!(entries[2].rank, 4);
    }

    #[test]
    fn test_window_spans_blocks() {
        let mut snapshot = BlockSnapshot::new(2);
        snapshot.rebuild(1, keys(&[1, 2, 3, 4, 5, 6]));

        let entries = snapshot.window(1, 4);
        assert_eq!(entries.len(), 4);
        let ranks: Vec<u64> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_window_clamps_end() {
        let mut snapshot = BlockSnapshot::new(2);
        snapshot.rebuild(1, keys(&[1, 2, 3]));

        let entries = snapshot.window(1, 999);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.last().unwrap().rank, 3);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let mut snapshot = BlockSnapshot::new(2);
        snapshot.rebuild(1, keys(&[1, 2, 3]));
        assert!(snapshot.window(3, 5).is_empty());
        assert!(snapshot.window(5, 3).is_empty());
    }

    #[test]
    fn test_window_full_range_ranks_are_contiguous() {
        let mut snapshot = BlockSnapshot::new(3);
        snapshot.rebuild(1, keys(&[5, 6, 7, 8, 9, 10, 11]));
        let entries = snapshot.window(0, 6);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.rank, i as u64 + 1);
        }
    }

    // ========================================
    // Position search
    // ========================================

    #[test]
    fn test_position_of_finds_every_key() {
        let mut snapshot = BlockSnapshot::new(3);
        let all = keys(&[2, 4, 6, 8, 10, 12, 14, 16]);
        snapshot.rebuild(1, all.clone());

        for (expected, key) in all.iter().enumerate() {
            assert_eq!(snapshot.position_of(key), Some(expected));
        }
    }

    #[test]
    fn test_position_of_missing_key() {
        let mut snapshot = BlockSnapshot::new(3);
        snapshot.rebuild(1, keys(&[2, 4, 6]));
        assert_eq!(
            snapshot.position_of(&RankedKey::new(Score::from(5), 99)),
            None
        );
    }

    #[test]
    fn test_position_of_on_empty_snapshot() {
        let snapshot = BlockSnapshot::new(3);
        assert_eq!(
            snapshot.position_of(&RankedKey::new(Score::from(1), 1)),
            None
        );
    }

    #[test]
    fn test_position_of_tie_broken_keys() {
        // Same score, different ids: each must resolve to its own position
        let mut snapshot = BlockSnapshot::new(2);
        let tied = vec![
            RankedKey::new(Score::from(5), 1),
            RankedKey::new(Score::from(5), 2),
            RankedKey::new(Score::from(5), 3),
        ];
        snapshot.rebuild(1, tied.clone());
        for (expected, key) in tied.iter().enumerate() {
            assert_eq!(snapshot.position_of(key), Some(expected));
        }
    }
}
