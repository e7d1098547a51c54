//! Command line arguments.

use crate::error::{Result, TopologyError};
use crate::models::{NetworkMask, SiblingOptions, Subnet};
use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    // "10.0.0.5/24", "10.0.0.5/255.255.255.0", "10.0.0.5 255.255.255.0"
    static ref TARGET_RE: Regex = Regex::new(
        r"^\s*(\d{1,3}(?:\.\d{1,3}){3})\s*(?:/\s*|\s+)(\d{1,2}|\d{1,3}(?:\.\d{1,3}){3})\s*$"
    )
    .expect("Invalid Regex?");
}

/// Show the network prefix, host identifier, broadcast address and
/// siblings of an IPv4 address.
#[derive(Parser, Debug)]
#[command(name = "netmask-topology", version)]
pub struct Cli {
    /// Address with prefix, e.g. 192.168.178.5/29 or 192.168.178.5/255.255.255.248
    pub target: String,

    /// Mask given as a separate argument, e.g. 255.255.255.248
    pub mask: Option<String>,

    /// Include the address itself in the sibling list
    #[arg(long)]
    pub include_self: bool,

    /// Include the broadcast address
    #[arg(long)]
    pub include_broadcast: bool,

    /// Include the network identifier
    #[arg(long)]
    pub include_network: bool,

    /// Include all three special addresses
    #[arg(long)]
    pub all: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Maximum siblings to print (overrides NETMASK_SIBLING_LIMIT)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl Cli {
    pub fn options(&self) -> SiblingOptions {
        if self.all {
            return SiblingOptions::INCLUDE_ALL;
        }
        SiblingOptions {
            include_self: self.include_self,
            include_broadcast: self.include_broadcast,
            include_network_identifier: self.include_network,
        }
    }

    pub fn subnet(&self) -> Result<Subnet> {
        match &self.mask {
            Some(mask) => parse_target(&format!("{} {}", self.target, mask)),
            None => parse_target(&self.target),
        }
    }
}

/// Parse `addr/prefix` or `addr mask` into a [`Subnet`].
pub fn parse_target(input: &str) -> Result<Subnet> {
    let caps = TARGET_RE
        .captures(input)
        .ok_or_else(|| TopologyError::invalid(format!("Expected ADDRESS/PREFIX, got '{input}'")))?;
    log::trace!("parse_target({input}) caps={caps:?}");

    let addr: Ipv4Addr = caps[1]
        .parse()
        .map_err(|_| TopologyError::invalid(format!("Invalid address {}", &caps[1])))?;
    let mask: NetworkMask = caps[2].parse()?;
    Ok(Subnet::new(addr, mask))
}
