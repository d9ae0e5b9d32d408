//! End-to-end scenarios over the public API

use mongocm_core::chainparams::{
    build_params, create_genesis_block, main_params, params, regtest_params, select_params,
    test_params, ActiveParams, Base58Type, GenesisError, Network, NetworkRegistry, ParamsError,
    GENESIS_HASH, GENESIS_MERKLE_ROOT,
};
use mongocm_core::consensus::{meets_target, CheckpointStore, CheckpointSummary};
use mongocm_core::crypto::Hash;
use mongocm_core::zerocoin::zerocoin_params;
use once_cell::sync::Lazy;

fn documented_2163() -> Hash {
    Hash::from_hex("21454ab21a19d24a090cb734ea77a43e2d81c4937c8850d565fb3b9cb1cf3295").unwrap()
}

// Same inputs at the easiest target, with a nonce that meets it.
fn resealed(network: Network) -> mongocm_core::chainparams::ChainParams {
    let mut params = build_params(network);
    params.genesis.bits = 0x207f_ffff;
    loop {
        let hash = create_genesis_block(&params).unwrap().hash();
        if meets_target(&hash, params.genesis.bits) {
            params.genesis.expected_hash = hash;
            return params;
        }
        params.genesis.nonce += 1;
    }
}

static RESEALED: Lazy<NetworkRegistry> =
    Lazy::new(|| NetworkRegistry::from_records(Network::ALL.map(resealed)));

fn resealed_registry() -> &'static NetworkRegistry {
    &RESEALED
}

// The only test in this binary that touches the process-wide selection.
#[test]
fn test_select_main_refused_on_genesis_mismatch() {
    match select_params(Network::Main) {
        Err(ParamsError::Genesis(GenesisError::HashMismatch {
            network,
            expected,
            computed,
        })) => {
            assert_eq!(network, Network::Main);
            assert_eq!(expected, GENESIS_HASH);
            assert_ne!(computed, GENESIS_HASH);
        }
        other => panic!("expected a genesis hash mismatch, got {other:?}"),
    }
    assert!(matches!(params(), Err(ParamsError::NotSelected)));
    assert!(!NetworkRegistry::global().is_verified(Network::Main));
}

#[test]
fn test_select_main_end_to_end() {
    let active = ActiveParams::with_registry(resealed_registry);
    let selected = active.select(Network::Main).unwrap();
    assert!(std::ptr::eq(selected, active.get().unwrap()));

    assert_eq!(selected.default_port, 16519);
    assert_eq!(selected.network_id(), "main");
    assert_eq!(selected.checkpoints.get(0), Some(&GENESIS_HASH));
    assert!(selected.checkpoints.verify(2163, &documented_2163()));
    assert!(!selected.checkpoints.verify(2163, &Hash::zero()));
    assert!(!selected.checkpoints.verify(2163, &GENESIS_HASH));

    assert!(active.select(Network::Test).is_err());
    assert!(resealed_registry().is_verified(Network::Main));

    let zerocoin = zerocoin_params(selected).unwrap();
    assert_eq!(zerocoin.modulus_bits(), 2046);
}

#[test]
fn test_published_genesis_hash_meets_target() {
    for params in NetworkRegistry::new().iter() {
        assert_eq!(params.genesis_hash(), GENESIS_HASH);
        assert_eq!(params.checkpoints.get(0), Some(&GENESIS_HASH));
        assert!(meets_target(&params.genesis_hash(), params.genesis.bits));
    }
}

#[test]
fn test_every_network_shares_one_genesis_block() {
    let registry = NetworkRegistry::new();
    let main_block = create_genesis_block(registry.get(Network::Main)).unwrap();
    assert_eq!(main_block.header.merkle_root, GENESIS_MERKLE_ROOT);
    for network in Network::ALL {
        let block = create_genesis_block(registry.get(network)).unwrap();
        assert_eq!(block.hash(), main_block.hash());
        assert!(matches!(
            registry.verify_genesis(network),
            Err(GenesisError::HashMismatch { expected, .. }) if expected == GENESIS_HASH
        ));
    }
}

#[test]
fn test_tampered_genesis_is_rejected() {
    let mut params = resealed(Network::Main);
    assert!(mongocm_core::chainparams::verify_genesis(&params).is_ok());
    params.genesis.nonce += 1;
    assert!(mongocm_core::chainparams::verify_genesis(&params).is_err());

    let mut params = main_params();
    params.genesis.timestamp.push('!');
    assert!(mongocm_core::chainparams::verify_genesis(&params).is_err());
}

#[test]
fn test_address_prefixes_distinct_across_networks() {
    let records = [main_params(), test_params(), regtest_params()];
    for kind in [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
    ] {
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert_ne!(
                    a.base58_prefix(kind),
                    b.base58_prefix(kind),
                    "{kind:?} shared by {} and {}",
                    a.network,
                    b.network
                );
            }
        }
    }
}

#[test]
fn test_dummy_address_belongs_to_main() {
    let main = main_params();
    let test = test_params();
    let dummy = &main.masternodes.obfuscation_dummy_address;
    assert_eq!(main.address_kind(dummy), Some(Base58Type::PubkeyAddress));
    assert_eq!(test.address_kind(dummy), None);
}

#[test]
fn test_checkpoint_tables_per_network() {
    let registry = NetworkRegistry::new();
    let main = registry.get(Network::Main);
    for (height, hash) in main.checkpoints.iter() {
        assert!(main.checkpoints.verify(height, hash));
    }

    for network in [Network::Test, Network::Regtest] {
        let store = &registry.get(network).checkpoints;
        assert_eq!(store.len(), 1);
        assert!(store.verify(2163, &Hash::zero()));
        assert_eq!(store.total_blocks_estimate(), 0);
    }
    assert_eq!(registry.get(Network::Unit).checkpoints, main.checkpoints);
}

#[test]
fn test_empty_table_verifies_everything() {
    let store = CheckpointStore::empty(CheckpointSummary {
        last_checkpoint_time: 0,
        transactions_at_checkpoint: 0,
        transactions_per_day: 0.0,
    });
    assert!(store.is_empty());
    for height in [0, 1, 2163, u32::MAX] {
        assert!(store.verify(height, &Hash::zero()));
        assert!(store.verify(height, &GENESIS_HASH));
    }
    assert_eq!(store.last_checkpoint(|_| true), None);
}

#[test]
fn test_last_known_checkpoint() {
    let main = main_params();
    let known = [GENESIS_HASH, documented_2163()];
    let (height, hash) = main.checkpoints.last_checkpoint(|h| !known.contains(h)).unwrap();
    assert_eq!(height, 2000);
    assert_ne!(hash, documented_2163());
    assert_eq!(
        main.checkpoints.last_checkpoint(|h| *h == GENESIS_HASH),
        Some((0, GENESIS_HASH))
    );
}

#[test]
fn test_params_serialize_to_json() {
    let main = main_params();
    let json = serde_json::to_value(&main).unwrap();
    assert_eq!(json["network"], "main");
    assert_eq!(json["default_port"], 16519);
    assert_eq!(json["genesis"]["expected_hash"], GENESIS_HASH.to_hex());

    let restored: mongocm_core::chainparams::ChainParams = serde_json::from_value(json).unwrap();
    assert_eq!(restored, main);
}
