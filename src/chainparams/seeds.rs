//! Bootstrap seeds
//!
//! Fixed seeds are compiled-in addresses for the very first connection.
//! DNS seeds are hostnames the peer-discovery layer resolves itself.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::ONE_WEEK;

/// A compiled-in address: IPv6 bytes (IPv4-mapped for IPv4) and port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let [a, b, c, d] = octets;
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// A DNS seed: display name and the host to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// A fixed seed ready for the address manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Unix time the address was supposedly last seen
    pub last_seen: u64,
}

/// Convert fixed seeds, each last seen between one and two weeks before `now`.
///
/// The spread keeps freshly started nodes from all preferring the same seed.
pub fn load_fixed_seeds<R: Rng>(specs: &[SeedSpec], now: u64, rng: &mut R) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| SeedAddress {
            addr: spec.socket_addr(),
            last_seen: now
                .saturating_sub(rng.gen_range(0..ONE_WEEK))
                .saturating_sub(ONE_WEEK),
        })
        .collect()
}

/// Fixed seeds stamped against the system clock
pub fn fixed_seed_addresses(specs: &[SeedSpec]) -> Vec<SeedAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    load_fixed_seeds(specs, now, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ipv4_mapped_roundtrip() {
        let spec = SeedSpec::ipv4([167, 86, 104, 232], 16519);
        assert_eq!(spec.socket_addr(), SocketAddr::from(([167, 86, 104, 232], 16519)));
    }

    #[test]
    fn test_native_ipv6_stays_v6() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 1;
        let spec = SeedSpec { addr, port: 1 };
        assert!(spec.socket_addr().is_ipv6());
    }

    #[test]
    fn test_last_seen_between_one_and_two_weeks() {
        let specs = vec![SeedSpec::ipv4([10, 0, 0, 1], 1); 64];
        let now = 1_600_000_000;
        let mut rng = StdRng::seed_from_u64(7);
        for seed in load_fixed_seeds(&specs, now, &mut rng) {
            assert!(seed.last_seen <= now - ONE_WEEK);
            assert!(seed.last_seen > now - 2 * ONE_WEEK);
        }
    }
}
