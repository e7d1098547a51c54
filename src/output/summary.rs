//! One subnet's query results gathered for printing.

use crate::error::Result;
use crate::models::{NetworkMask, SiblingOptions, Subnet};
use crate::processing::{broadcast_address, host_identifier, network_prefix, sibling_count, siblings};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Results of every topology query for one address and mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    pub subnet: Subnet,
    pub mask: NetworkMask,
    pub cidr: u8,
    pub network: Ipv4Addr,
    pub host_identifier: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub options: SiblingOptions,
    pub sibling_count: u64,
    /// First `limit` siblings only.
    pub siblings: Vec<Ipv4Addr>,
    /// True when `sibling_count` exceeds the printed list.
    pub truncated: bool,
}

impl SubnetSummary {
    pub fn build(subnet: Subnet, options: SiblingOptions, limit: usize) -> Result<SubnetSummary> {
        let addr = subnet.addr;
        let mask = subnet.mask;
        let sibling_count = sibling_count(addr, &mask, options)?;
        let listed: Vec<Ipv4Addr> = siblings(addr, &mask, options)?.take(limit).collect();
        log::info!(
            "Summary {subnet}: {count} siblings, listing {listed}",
            count = sibling_count,
            listed = listed.len()
        );

        Ok(SubnetSummary {
            subnet,
            mask,
            cidr: mask.cidr(),
            network: network_prefix(addr, &mask)?,
            host_identifier: host_identifier(addr, &mask)?,
            broadcast: broadcast_address(addr, &mask)?,
            options,
            truncated: (listed.len() as u64) < sibling_count,
            sibling_count,
            siblings: listed,
        })
    }
}
