//! Property-based tests for checkpoints, activation heights and compact targets

use mongocm_core::chainparams::{main_params, ActivationHeight};
use mongocm_core::consensus::{compact_to_target, target_to_compact};
use mongocm_core::crypto::Hash;
use primitive_types::U256;
use proptest::prelude::*;

fn arb_hash() -> impl Strategy<Value = Hash> {
    any::<[u8; 32]>().prop_map(Hash::from_bytes)
}

proptest! {
    /// Heights without a checkpoint accept any hash
    #[test]
    fn prop_unchecked_heights_accept_anything(height in any::<u32>(), hash in arb_hash()) {
        let main = main_params();
        prop_assume!(main.checkpoints.get(height).is_none());
        prop_assert!(main.checkpoints.verify(height, &hash));
    }

    /// Checkpointed heights accept exactly one hash
    #[test]
    fn prop_checkpointed_heights_reject_others(index in 0usize..8, hash in arb_hash()) {
        let main = main_params();
        let (height, expected) = main.checkpoints.iter().nth(index).map(|(h, e)| (h, *e)).unwrap();
        prop_assert!(main.checkpoints.verify(height, &expected));
        prop_assert_eq!(main.checkpoints.verify(height, &hash), hash == expected);
    }

    /// Once active, a rule stays active at every later height
    #[test]
    fn prop_activation_is_monotonic(at in any::<u32>(), a in any::<u32>(), b in any::<u32>()) {
        let activation = ActivationHeight::at(at);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if activation.is_active(low) {
            prop_assert!(activation.is_active(high));
        }
    }

    /// Zerocoin gating follows the same monotonic rule in height and time
    #[test]
    fn prop_zerocoin_gating_is_monotonic(height in 0u32..10_000, time in 1_500_000_000u64..1_600_000_000) {
        let main = main_params();
        if main.is_zerocoin_active(height, time) {
            prop_assert!(main.is_zerocoin_active(height + 1, time));
            prop_assert!(main.is_zerocoin_active(height, time + 1));
        }
    }

    /// Estimated height never goes backwards as the clock advances
    #[test]
    fn prop_estimated_height_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let main = main_params();
        let spacing = main.pow.target_spacing;
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let first = main.checkpoints.estimated_height(early, spacing);
        let second = main.checkpoints.estimated_height(late, spacing);
        prop_assert!(first <= second);
        prop_assert!(first >= main.checkpoints.total_blocks_estimate());
    }

    /// Progress estimates stay within [0, 1]
    #[test]
    fn prop_progress_is_a_fraction(chain_tx in 0u64..10_000_000, tip in 0u64..2_000_000_000, now in 0u64..2_000_000_000, sig in any::<bool>()) {
        let main = main_params();
        let progress = main.checkpoints.guess_verification_progress(chain_tx, tip, now, sig);
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    /// Compact encoding truncates, never rounds up, and keeps at least 16 significant bits
    #[test]
    fn prop_compact_round_trip_within_precision(words in any::<[u64; 4]>()) {
        let target = U256(words);
        prop_assume!(!target.is_zero());

        let compact = target_to_compact(&target);
        let decoded = compact_to_target(compact).unwrap();
        prop_assert!(decoded <= target);

        let bits = target.bits();
        if bits > 16 {
            prop_assert!(target - decoded < U256::one() << (bits - 16));
        } else {
            prop_assert_eq!(decoded, target);
        }
        prop_assert_eq!(target_to_compact(&decoded), compact);
    }
}
