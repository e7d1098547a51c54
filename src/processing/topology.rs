//! Network prefix, host identifier and sibling queries for an address.
//!
//! All functions are pure. They take any [`IpAddr`] so the address-family
//! check happens here, before any bit arithmetic.

use super::siblings::{Siblings, SubnetBounds};
use crate::error::Result;
use crate::models::{bit_buffer, require_ipv4, require_present, NetworkMask, SiblingOptions};
use std::net::{IpAddr, Ipv4Addr};

/// Check optional collaborator input: absent values are `InvalidArgument`,
/// non-IPv4 addresses are `Unsupported`.
pub fn resolve_inputs(
    addr: Option<IpAddr>,
    mask: Option<&NetworkMask>,
) -> Result<(Ipv4Addr, NetworkMask)> {
    let addr = require_present(addr, "address")?;
    let mask = require_present(mask, "mask")?;
    Ok((require_ipv4(addr)?, *mask))
}

/// `mask & addr`, e.g. `10.20.30.40` with `/24` gives `10.20.30.0`.
pub fn network_prefix(addr: impl Into<IpAddr>, mask: &NetworkMask) -> Result<Ipv4Addr> {
    mask.apply_to(addr)
}

/// `!mask & addr`, e.g. `10.20.30.40` with `/24` gives `0.0.0.40`.
pub fn host_identifier(addr: impl Into<IpAddr>, mask: &NetworkMask) -> Result<Ipv4Addr> {
    let addr = require_ipv4(addr)?;
    let host_bits = bit_buffer::and(&bit_buffer::not(&mask.bytes()), &addr.octets());
    Ok(to_ipv4(&host_bits))
}

/// Network prefix with every host bit set.
pub fn broadcast_address(addr: impl Into<IpAddr>, mask: &NetworkMask) -> Result<Ipv4Addr> {
    Ok(broadcast_of(require_ipv4(addr)?, mask))
}

fn broadcast_of(addr: Ipv4Addr, mask: &NetworkMask) -> Ipv4Addr {
    let broadcast = bit_buffer::or(&mask.apply(addr).octets(), &mask.host_mask().octets());
    to_ipv4(&broadcast)
}

/// Number of addresses [`siblings`] yields, in closed form.
///
/// `2^host_bits` minus one for each distinct excluded special address.
pub fn sibling_count(
    addr: impl Into<IpAddr>,
    mask: &NetworkMask,
    options: SiblingOptions,
) -> Result<u64> {
    let bounds = bounds(addr.into(), mask, options)?;
    Ok(bounds.total() - bounds.excluded_from(0) as u64)
}

/// Lazy ascending sequence of the addresses in `addr`'s subnet, filtered
/// by `options`. Calling it again replays the same sequence.
pub fn siblings(
    addr: impl Into<IpAddr>,
    mask: &NetworkMask,
    options: SiblingOptions,
) -> Result<Siblings> {
    let addr = addr.into();
    let bounds = bounds(addr, mask, options)?;
    log::debug!(
        "siblings({addr}/{cidr}) options={options} total={total}",
        cidr = mask.cidr(),
        total = bounds.total()
    );
    Ok(Siblings::new(bounds))
}

/// Siblings of an address already known to be IPv4.
pub(crate) fn ipv4_siblings(
    reference: Ipv4Addr,
    mask: &NetworkMask,
    options: SiblingOptions,
) -> Siblings {
    Siblings::new(ipv4_bounds(reference, mask, options))
}

fn bounds(addr: IpAddr, mask: &NetworkMask, options: SiblingOptions) -> Result<SubnetBounds> {
    Ok(ipv4_bounds(require_ipv4(addr)?, mask, options))
}

fn ipv4_bounds(reference: Ipv4Addr, mask: &NetworkMask, options: SiblingOptions) -> SubnetBounds {
    SubnetBounds {
        reference: u32::from(reference),
        network: u32::from(mask.apply(reference)),
        broadcast: u32::from(broadcast_of(reference, mask)),
        options,
    }
}

fn to_ipv4(bytes: &[u8]) -> Ipv4Addr {
    let mut octets = [0u8; 4];
    octets.copy_from_slice(bytes);
    Ipv4Addr::from(octets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TopologyError;
    use crate::models::parse_address_bytes;
    use std::net::Ipv6Addr;

    fn mask(octets: [u8; 4]) -> NetworkMask {
        NetworkMask::from_octets(octets).unwrap()
    }

    fn ip(a: u8, b: u8, c: u8, d: u8) -> Ipv4Addr {
        Ipv4Addr::new(a, b, c, d)
    }

    #[test]
    fn test_network_prefix() {
        let m = mask([255, 255, 255, 0]);
        assert_eq!(network_prefix(ip(10, 20, 30, 40), &m).unwrap(), ip(10, 20, 30, 0));
        let m16 = NetworkMask::from_cidr(16).unwrap();
        assert_eq!(network_prefix(ip(192, 168, 1, 42), &m16).unwrap(), ip(192, 168, 0, 0));
        assert_eq!(
            network_prefix(ip(192, 168, 1, 42), &NetworkMask::EMPTY).unwrap(),
            ip(0, 0, 0, 0)
        );
    }

    #[test]
    fn test_host_identifier() {
        let m = mask([255, 255, 255, 0]);
        assert_eq!(host_identifier(ip(10, 20, 30, 40), &m).unwrap(), ip(0, 0, 0, 40));
        let m20 = NetworkMask::from_cidr(20).unwrap();
        assert_eq!(host_identifier(ip(10, 20, 30, 40), &m20).unwrap(), ip(0, 0, 14, 40));
    }

    #[test]
    fn test_prefix_and_host_partition_address() {
        let addr = ip(172, 16, 201, 77);
        for c in 0..=32 {
            let m = NetworkMask::from_cidr(c).unwrap();
            let net = u32::from(network_prefix(addr, &m).unwrap());
            let host = u32::from(host_identifier(addr, &m).unwrap());
            assert_eq!(net | host, u32::from(addr));
            assert_eq!(net & host, 0);
        }
    }

    #[test]
    fn test_broadcast_address() {
        let m = NetworkMask::from_cidr(24).unwrap();
        assert_eq!(broadcast_address(ip(192, 168, 1, 0), &m).unwrap(), ip(192, 168, 1, 255));
        let m8 = NetworkMask::from_cidr(8).unwrap();
        assert_eq!(broadcast_address(ip(192, 168, 1, 0), &m8).unwrap(), ip(192, 255, 255, 255));
        let m32 = NetworkMask::from_cidr(32).unwrap();
        assert_eq!(broadcast_address(ip(192, 168, 1, 0), &m32).unwrap(), ip(192, 168, 1, 0));
    }

    #[test]
    fn test_rejects_ipv6() {
        let m = mask([255, 255, 255, 0]);
        let v6 = parse_address_bytes(&[10, 20, 30, 40, 10, 20, 30, 40, 10, 20, 30, 40, 10, 20, 30, 40])
            .unwrap();
        assert!(matches!(network_prefix(v6, &m), Err(TopologyError::Unsupported(_))));
        assert!(matches!(host_identifier(v6, &m), Err(TopologyError::Unsupported(_))));
        assert!(matches!(broadcast_address(v6, &m), Err(TopologyError::Unsupported(_))));
        assert!(matches!(
            siblings(v6, &m, SiblingOptions::INCLUDE_ALL),
            Err(TopologyError::Unsupported(_))
        ));
        assert!(matches!(
            sibling_count(Ipv6Addr::LOCALHOST, &m, SiblingOptions::INCLUDE_ALL),
            Err(TopologyError::Unsupported(_))
        ));
    }

    #[test]
    fn test_resolve_inputs() {
        let m = mask([255, 255, 255, 0]);
        let addr = IpAddr::V4(ip(10, 0, 0, 1));
        assert_eq!(resolve_inputs(Some(addr), Some(&m)).unwrap(), (ip(10, 0, 0, 1), m));
        assert!(matches!(
            resolve_inputs(None, Some(&m)),
            Err(TopologyError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolve_inputs(Some(addr), None),
            Err(TopologyError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolve_inputs(Some(IpAddr::V6(Ipv6Addr::LOCALHOST)), Some(&m)),
            Err(TopologyError::Unsupported(_))
        ));
    }

    #[test]
    fn test_siblings_include_all() {
        let addr = ip(192, 168, 178, 5);
        let m = mask([255, 255, 255, 248]);
        let got: Vec<Ipv4Addr> = siblings(addr, &m, SiblingOptions::INCLUDE_ALL)
            .unwrap()
            .collect();
        let expected: Vec<Ipv4Addr> = (0..=7).map(|d| ip(192, 168, 178, d)).collect();
        assert_eq!(got, expected);
        assert_eq!(sibling_count(addr, &m, SiblingOptions::INCLUDE_ALL).unwrap(), 8);
    }

    #[test]
    fn test_siblings_flags() {
        let addr = ip(10, 20, 3, 193);
        let m = mask([255, 255, 255, 240]);

        let options = SiblingOptions::INCLUDE_NETWORK_IDENTIFIER | SiblingOptions::INCLUDE_BROADCAST;
        let mut expected: Vec<Ipv4Addr> = (192..=207)
            .filter(|d| *d != 193)
            .map(|d| ip(10, 20, 3, d))
            .collect();
        assert_eq!(siblings(addr, &m, options).unwrap().collect::<Vec<_>>(), expected);
        assert_eq!(sibling_count(addr, &m, options).unwrap(), 15);

        expected.pop();
        let options = SiblingOptions::INCLUDE_NETWORK_IDENTIFIER;
        assert_eq!(siblings(addr, &m, options).unwrap().collect::<Vec<_>>(), expected);
        assert_eq!(sibling_count(addr, &m, options).unwrap(), 14);

        expected.remove(0);
        let options = SiblingOptions::EXCLUDE_ALL;
        assert_eq!(siblings(addr, &m, options).unwrap().collect::<Vec<_>>(), expected);
        assert_eq!(sibling_count(addr, &m, options).unwrap(), 13);
    }

    #[test]
    fn test_no_double_subtraction() {
        let m = NetworkMask::from_cidr(28).unwrap();
        let net = ip(10, 20, 3, 192);
        let bcast = ip(10, 20, 3, 207);
        assert_eq!(sibling_count(net, &m, SiblingOptions::EXCLUDE_ALL).unwrap(), 14);
        assert_eq!(sibling_count(bcast, &m, SiblingOptions::EXCLUDE_ALL).unwrap(), 14);
        assert_eq!(
            sibling_count(net, &m, SiblingOptions::INCLUDE_NETWORK_IDENTIFIER).unwrap(),
            14
        );
        // self and network identifier both have to be kept for .192 to stay
        assert_eq!(
            sibling_count(net, &m, SiblingOptions::INCLUDE_SELF).unwrap(),
            14
        );
        assert_eq!(
            sibling_count(
                net,
                &m,
                SiblingOptions::INCLUDE_SELF | SiblingOptions::INCLUDE_NETWORK_IDENTIFIER
            )
            .unwrap(),
            15
        );
        assert_eq!(
            siblings(net, &m, SiblingOptions::EXCLUDE_ALL).unwrap().count(),
            14
        );
    }

    #[test]
    fn test_count_matches_sequence() {
        let addr = ip(10, 1, 2, 3);
        let flags = [
            SiblingOptions::EXCLUDE_ALL,
            SiblingOptions::INCLUDE_SELF,
            SiblingOptions::INCLUDE_BROADCAST,
            SiblingOptions::INCLUDE_NETWORK_IDENTIFIER,
            SiblingOptions::INCLUDE_SELF | SiblingOptions::INCLUDE_BROADCAST,
            SiblingOptions::INCLUDE_ALL,
        ];
        for c in 20..=32 {
            let m = NetworkMask::from_cidr(c).unwrap();
            for options in flags {
                let counted = sibling_count(addr, &m, options).unwrap();
                let walked = siblings(addr, &m, options).unwrap().count() as u64;
                assert_eq!(counted, walked, "/{c} {options}");
            }
        }
    }

    #[test]
    fn test_single_host() {
        let m = NetworkMask::from_cidr(32).unwrap();
        let addr = ip(10, 0, 0, 1);
        assert_eq!(sibling_count(addr, &m, SiblingOptions::INCLUDE_SELF).unwrap(), 1);
        assert_eq!(sibling_count(addr, &m, SiblingOptions::INCLUDE_ALL).unwrap(), 1);
        assert_eq!(
            sibling_count(addr, &m, SiblingOptions::INCLUDE_BROADCAST).unwrap(),
            0
        );
        assert_eq!(
            siblings(addr, &m, SiblingOptions::INCLUDE_SELF).unwrap().collect::<Vec<_>>(),
            vec![addr]
        );
        assert_eq!(siblings(addr, &m, SiblingOptions::EXCLUDE_ALL).unwrap().count(), 0);
    }

    #[test]
    fn test_whole_address_space_is_lazy() {
        let addr = ip(1, 2, 3, 4);
        let m = NetworkMask::EMPTY;
        assert_eq!(sibling_count(addr, &m, SiblingOptions::INCLUDE_ALL).unwrap(), 1 << 32);
        assert_eq!(
            sibling_count(addr, &m, SiblingOptions::EXCLUDE_ALL).unwrap(),
            (1 << 32) - 3
        );
        let first: Vec<Ipv4Addr> = siblings(addr, &m, SiblingOptions::EXCLUDE_ALL)
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(first, vec![ip(0, 0, 0, 1), ip(0, 0, 0, 2), ip(0, 0, 0, 3)]);
    }

    #[test]
    fn test_siblings_restartable() {
        let addr = ip(192, 168, 178, 5);
        let m = NetworkMask::from_cidr(29).unwrap();
        let first: Vec<_> = siblings(addr, &m, SiblingOptions::EXCLUDE_ALL).unwrap().collect();
        let second: Vec<_> = siblings(addr, &m, SiblingOptions::EXCLUDE_ALL).unwrap().collect();
        assert_eq!(first, second);
    }
}
