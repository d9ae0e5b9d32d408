//! Zerocoin activation gating
//!
//! Pure functions of a record's activation fields and a candidate block's
//! height and time.

use crate::chainparams::ChainParams;

impl ChainParams {
    /// Zerocoin validation applies once both the start height and the start
    /// time have been reached
    pub fn is_zerocoin_active(&self, height: u32, time: u64) -> bool {
        self.is_zerocoin_active_at_height(height) && time >= self.activations.zerocoin_start_time
    }

    pub fn is_zerocoin_active_at_height(&self, height: u32) -> bool {
        self.activations.zerocoin_start_height.is_active(height)
    }

    pub fn accumulators_active(&self, height: u32) -> bool {
        self.activations.accumulator_start_height.is_active(height)
    }

    pub fn enforces_serial_range(&self, height: u32) -> bool {
        self.activations.enforce_serial_range.is_active(height)
    }

    /// Accumulators are rebuilt at exactly the trigger height
    pub fn requires_accumulator_recalculation(&self, height: u32) -> bool {
        self.activations.recalculate_accumulators.height() == Some(height)
    }

    /// Between the first block carrying bad serials and the last good
    /// accumulator checkpoint, inclusive
    pub fn in_fraudulent_window(&self, height: u32) -> bool {
        match (
            self.activations.first_fraudulent_block.height(),
            self.activations.last_good_checkpoint.height(),
        ) {
            (Some(first), Some(last)) => (first..=last).contains(&height),
            _ => false,
        }
    }

    /// Header version a block at `height` must carry
    pub fn required_header_version(&self, height: u32) -> i32 {
        if self.is_zerocoin_active_at_height(height) {
            self.zerocoin.header_version
        } else {
            self.genesis.version
        }
    }
}
