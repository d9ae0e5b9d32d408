//! Checkpoint store
//!
//! Known-good block hashes at fixed heights. A chain that disagrees with a
//! checkpoint is rejected; agreeing with one proves nothing about the
//! blocks in between. The summary numbers only feed progress estimates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::crypto::Hash;

/// Blocks after the last checkpoint cost this much more to verify
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Advisory figures describing the chain at its last checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSummary {
    /// Timestamp of the last checkpointed block
    pub last_checkpoint_time: u64,
    /// Total transactions between genesis and the last checkpoint
    pub transactions_at_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointStore {
    checkpoints: BTreeMap<u32, Hash>,
    summary: CheckpointSummary,
}

impl CheckpointStore {
    pub fn new(entries: &[(u32, Hash)], summary: CheckpointSummary) -> Self {
        Self {
            checkpoints: entries.iter().copied().collect(),
            summary,
        }
    }

    /// A store without checkpoints; every height verifies
    pub fn empty(summary: CheckpointSummary) -> Self {
        Self::new(&[], summary)
    }

    /// True unless a checkpoint exists at `height` with a different hash
    pub fn verify(&self, height: u32, hash: &Hash) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) if expected != hash => {
                warn!(height, expected = %expected, got = %hash, "checkpoint mismatch");
                false
            }
            _ => true,
        }
    }

    pub fn get(&self, height: u32) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash)> + '_ {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn summary(&self) -> &CheckpointSummary {
        &self.summary
    }

    /// Height of the last checkpoint, 0 when there is none
    pub fn total_blocks_estimate(&self) -> u32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Highest checkpoint whose block the caller already has
    pub fn last_checkpoint<F>(&self, is_known: F) -> Option<(u32, Hash)>
    where
        F: Fn(&Hash) -> bool,
    {
        self.checkpoints
            .iter()
            .rev()
            .find(|(_, hash)| is_known(hash))
            .map(|(height, hash)| (*height, *hash))
    }

    /// Rough current chain height for progress reporting.
    ///
    /// Times before the last checkpoint estimate the checkpoint height itself.
    pub fn estimated_height(&self, now: u64, target_spacing: u64) -> u32 {
        let elapsed = now.saturating_sub(self.summary.last_checkpoint_time);
        let blocks = elapsed.checked_div(target_spacing).unwrap_or(0);
        let blocks = u32::try_from(blocks).unwrap_or(u32::MAX);
        self.total_blocks_estimate().saturating_add(blocks)
    }

    /// Fraction of the chain's verification work already done.
    ///
    /// Transactions up to the last checkpoint are cheap. Later ones are
    /// weighted by the signature-check factor when `sigchecks` is set.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        tip_time: u64,
        now: u64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let summary = &self.summary;
        let days_since = |from: u64| now.saturating_sub(from) as f64 / SECONDS_PER_DAY;

        let (work_before, work_after) = if chain_tx <= summary.transactions_at_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (summary.transactions_at_checkpoint - chain_tx) as f64;
            let expensive_after =
                days_since(summary.last_checkpoint_time) * summary.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = summary.transactions_at_checkpoint as f64;
            let expensive_before = (chain_tx - summary.transactions_at_checkpoint) as f64;
            let expensive_after = days_since(tip_time) * summary.transactions_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}
