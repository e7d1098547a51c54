//! Address-family gate between raw caller input and the IPv4-only math.

use crate::error::{Result, TopologyError};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Number of bytes in an IPv4 address.
pub const IPV4_LENGTH: usize = 4;
const IPV6_LENGTH: usize = 16;

/// Build an [`IpAddr`] from raw network-order bytes.
///
/// 4 bytes give an IPv4 address and 16 bytes an IPv6 address. Any other
/// length is rejected.
pub fn parse_address_bytes(bytes: &[u8]) -> Result<IpAddr> {
    match bytes.len() {
        IPV4_LENGTH => {
            let octets: [u8; IPV4_LENGTH] = bytes
                .try_into()
                .map_err(|_| TopologyError::invalid("Invalid address length"))?;
            Ok(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        IPV6_LENGTH => {
            let octets: [u8; IPV6_LENGTH] = bytes
                .try_into()
                .map_err(|_| TopologyError::invalid("Invalid address length"))?;
            Ok(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        len => Err(TopologyError::invalid(format!(
            "Invalid address length: {len} bytes"
        ))),
    }
}

/// Reject anything that is not an IPv4 address.
pub fn require_ipv4(addr: impl Into<IpAddr>) -> Result<Ipv4Addr> {
    match addr.into() {
        IpAddr::V4(v4) => Ok(v4),
        IpAddr::V6(v6) => {
            log::debug!("Rejecting non-IPv4 address {v6}");
            Err(TopologyError::only_ipv4())
        }
    }
}

/// Turn an absent argument into [`TopologyError::InvalidArgument`].
pub fn require_present<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| TopologyError::invalid(format!("{name} is required")))
}
