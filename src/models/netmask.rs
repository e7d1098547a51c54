//! IPv4 network mask value type.
//!
//! A [`NetworkMask`] is always a valid prefix mask: a run of 1 bits followed
//! only by 0 bits. Every constructor rejects other patterns, and every
//! combining operation returns a new value, so a live instance never needs
//! re-validation.

use super::address::require_ipv4;
use super::bit_buffer;
use crate::error::{Result, TopologyError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;
/// Number of bytes in a mask.
pub const MASK_LENGTH: usize = 4;

/// Convert a CIDR prefix length to the mask as a u32.
fn cidr_to_bits(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        return Err(TopologyError::invalid(format!(
            "CIDR length {len} is outside 0..={MAX_LENGTH}"
        )));
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Ok(mask as u32)
}

/// An immutable 32-bit IPv4 prefix mask.
///
/// Ordering follows the numeric mask value, so a /8 sorts before a /24.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Default, Copy, Clone, Hash)]
pub struct NetworkMask {
    octets: [u8; MASK_LENGTH],
}

impl NetworkMask {
    /// The all-zero mask (/0).
    pub const EMPTY: NetworkMask = NetworkMask {
        octets: [0; MASK_LENGTH],
    };

    /// Length of a mask in bits.
    pub const ADDRESS_LENGTH: u8 = MAX_LENGTH;

    pub fn empty() -> NetworkMask {
        Self::EMPTY
    }

    /// Mask with the first `len` bits set.
    ///
    /// # Examples
    /// ```
    /// use netmask_topology::models::NetworkMask;
    /// let mask = NetworkMask::from_cidr(21).unwrap();
    /// assert_eq!(mask.bytes(), [255, 255, 248, 0]);
    /// ```
    pub fn from_cidr(len: u8) -> Result<NetworkMask> {
        let bits = cidr_to_bits(len)?;
        Ok(NetworkMask {
            octets: bits.to_be_bytes(),
        })
    }

    /// Mask from raw network-order bytes. Exactly 4 bytes forming a prefix
    /// mask are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<NetworkMask> {
        let octets: [u8; MASK_LENGTH] = bytes.try_into().map_err(|_| {
            log::debug!("Rejecting mask of {} bytes", bytes.len());
            TopologyError::invalid(format!("Invalid mask length: {} bytes", bytes.len()))
        })?;
        Self::from_octets(octets)
    }

    /// Mask from 4 octets, e.g. `[255, 255, 255, 0]`.
    pub fn from_octets(octets: [u8; MASK_LENGTH]) -> Result<NetworkMask> {
        if !bit_buffer::represents_valid_mask(&octets) {
            log::debug!(
                "Rejecting mask {}",
                bit_buffer::to_binary_string_with(&octets, '.')
            );
            return Err(TopologyError::invalid(format!(
                "{} is not a valid network mask",
                Ipv4Addr::from(octets)
            )));
        }
        Ok(NetworkMask { octets })
    }

    /// Mask from the raw bytes of an address such as `255.255.248.0`.
    ///
    /// IPv6 addresses fail the 4-byte length check.
    pub fn from_address(addr: impl Into<IpAddr>) -> Result<NetworkMask> {
        match addr.into() {
            IpAddr::V4(v4) => Self::from_octets(v4.octets()),
            IpAddr::V6(v6) => Self::from_bytes(&v6.octets()),
        }
    }

    /// Mask from its 32-bit big-endian integer value, e.g. `0xFFFFF800`.
    pub fn from_bits(bits: u32) -> Result<NetworkMask> {
        Self::from_octets(bits.to_be_bytes())
    }

    // Only for results of AND/OR/NOT over two valid masks.
    fn from_combined(bytes: &[u8]) -> NetworkMask {
        let mut octets = [0u8; MASK_LENGTH];
        octets.copy_from_slice(bytes);
        debug_assert!(bit_buffer::represents_valid_mask(&octets));
        NetworkMask { octets }
    }

    /// CIDR prefix length (count of leading 1 bits).
    pub fn cidr(&self) -> u8 {
        bit_buffer::count_leading(&self.octets, true) as u8
    }

    /// Number of host bits (`32 - cidr`).
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.cidr()
    }

    /// Copy of the mask bytes.
    pub fn bytes(&self) -> [u8; MASK_LENGTH] {
        self.octets
    }

    pub fn to_bits(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// The mask in address form, e.g. `255.255.255.0`.
    pub fn to_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }

    /// The inverse (wildcard) mask, e.g. `0.0.0.255` for a /24.
    pub fn host_mask(&self) -> Ipv4Addr {
        let inverted = bit_buffer::not(&self.octets);
        let mut octets = [0u8; MASK_LENGTH];
        octets.copy_from_slice(&inverted);
        Ipv4Addr::from(octets)
    }

    /// Network prefix of `addr`: mask AND address.
    pub fn apply(&self, addr: Ipv4Addr) -> Ipv4Addr {
        let combined = bit_buffer::and(&self.octets, &addr.octets());
        let mut octets = [0u8; MASK_LENGTH];
        octets.copy_from_slice(&combined);
        Ipv4Addr::from(octets)
    }

    /// Network prefix of any address; non-IPv4 input is `Unsupported`.
    pub fn apply_to(&self, addr: impl Into<IpAddr>) -> Result<Ipv4Addr> {
        Ok(self.apply(require_ipv4(addr)?))
    }

    /// Bitwise AND: the shorter (wider-network) of the two masks.
    pub fn and(&self, other: &NetworkMask) -> NetworkMask {
        Self::from_combined(&bit_buffer::and(&self.octets, &other.octets))
    }

    /// Bitwise OR: the longer of the two masks.
    pub fn or(&self, other: &NetworkMask) -> NetworkMask {
        Self::from_combined(&bit_buffer::or(&self.octets, &other.octets))
    }

    /// OR where an absent operand is the identity.
    pub fn union(a: Option<&NetworkMask>, b: Option<&NetworkMask>) -> Option<NetworkMask> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.or(b)),
            (Some(only), None) | (None, Some(only)) => Some(*only),
            (None, None) => None,
        }
    }

    /// AND where an absent operand yields the empty mask.
    pub fn intersection(a: Option<&NetworkMask>, b: Option<&NetworkMask>) -> NetworkMask {
        match (a, b) {
            (Some(a), Some(b)) => a.and(b),
            _ => Self::EMPTY,
        }
    }

    /// Lengthen the prefix by `by` bits, clamped to 0..=32.
    pub fn extend(&self, by: i32) -> NetworkMask {
        self.with_cidr_offset(i64::from(by))
    }

    /// Shorten the prefix by `by` bits, clamped to 0..=32.
    pub fn abbreviate(&self, by: i32) -> NetworkMask {
        self.with_cidr_offset(-i64::from(by))
    }

    fn with_cidr_offset(&self, offset: i64) -> NetworkMask {
        let len = (i64::from(self.cidr()) + offset).clamp(0, i64::from(MAX_LENGTH));
        let bits = (u32::MAX as u64 >> (len as u32)) ^ u32::MAX as u64;
        NetworkMask {
            octets: (bits as u32).to_be_bytes(),
        }
    }
}

impl TryFrom<Ipv4Addr> for NetworkMask {
    type Error = TopologyError;

    fn try_from(addr: Ipv4Addr) -> Result<NetworkMask> {
        Self::from_address(addr)
    }
}

impl TryFrom<&[u8]> for NetworkMask {
    type Error = TopologyError;

    fn try_from(bytes: &[u8]) -> Result<NetworkMask> {
        Self::from_bytes(bytes)
    }
}

impl From<NetworkMask> for Ipv4Addr {
    fn from(mask: NetworkMask) -> Ipv4Addr {
        mask.to_address()
    }
}

/// Accepts `255.255.255.0`, `/24` or `24`.
impl FromStr for NetworkMask {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<NetworkMask> {
        let s = s.trim();
        let len = s.strip_prefix('/').unwrap_or(s);
        if let Ok(len) = len.parse::<u8>() {
            return Self::from_cidr(len);
        }
        let addr = Ipv4Addr::from_str(s)
            .map_err(|_| TopologyError::invalid(format!("Invalid network mask: {s}")))?;
        Self::from_address(addr)
    }
}

impl Serialize for NetworkMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_address().to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkMask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkMask::from_str(&s).map_err(de::Error::custom)
    }
}

/// `255.255.248.0 (11111111.11111111.11111000.00000000)`
impl std::fmt::Display for NetworkMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.to_address(),
            bit_buffer::to_binary_string_with(&self.octets, '.')
        )
    }
}
