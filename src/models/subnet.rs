//! An address together with its network mask, written `a.b.c.d/nn`.

use super::netmask::NetworkMask;
use super::sibling_options::SiblingOptions;
use crate::error::{Result, TopologyError};
use crate::processing::{ipv4_siblings, Siblings};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 address with its mask. `addr` may be any host inside the block.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The network mask.
    pub mask: NetworkMask,
}

impl Subnet {
    pub fn new(addr: Ipv4Addr, mask: NetworkMask) -> Subnet {
        Subnet { addr, mask }
    }

    /// Lowest (network identifier) address of the block.
    pub fn lo(&self) -> Ipv4Addr {
        self.mask.apply(self.addr)
    }

    /// Highest (broadcast) address of the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | u32::from(self.mask.host_mask()))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Number of addresses in the block, `2^host_bits`.
    pub fn size(&self) -> u64 {
        1u64 << self.mask.host_bits()
    }

    /// Addresses sharing this block with `addr`, filtered by `options`.
    pub fn siblings(&self, options: SiblingOptions) -> Siblings {
        ipv4_siblings(self.addr, &self.mask, options)
    }
}

/// Accepts `10.0.0.5/24` and `10.0.0.5/255.255.255.0`.
impl FromStr for Subnet {
    type Err = TopologyError;

    fn from_str(addr_cidr: &str) -> Result<Subnet> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(TopologyError::invalid(format!(
                "Invalid address/mask: {addr_cidr}"
            )));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| TopologyError::invalid(format!("Invalid address {}", parts[0])))?;
        let mask: NetworkMask = parts[1].parse()?;
        Ok(Subnet { addr, mask })
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask.cidr())
    }
}
