//! Lazy enumeration of the addresses that share a subnet.

use crate::models::SiblingOptions;
use itertools::Itertools;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// The three special addresses of one subnet plus the inclusion flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct SubnetBounds {
    pub reference: u32,
    pub network: u32,
    pub broadcast: u32,
    pub options: SiblingOptions,
}

impl SubnetBounds {
    /// A /32 has no separate network or broadcast address: the only
    /// member is the reference address, kept only under `include_self`.
    fn single_host(&self) -> bool {
        self.network == self.broadcast
    }

    /// Exclusion wins: an address that is both `self` and the network
    /// identifier is dropped if either of its flags is missing.
    pub fn is_excluded(&self, candidate: u32) -> bool {
        if self.single_host() {
            return !self.options.include_self;
        }
        (candidate == self.reference && !self.options.include_self)
            || (candidate == self.network && !self.options.include_network_identifier)
            || (candidate == self.broadcast && !self.options.include_broadcast)
    }

    /// Distinct excluded addresses at or above `from`.
    pub fn excluded_from(&self, from: u64) -> usize {
        [self.reference, self.network, self.broadcast]
            .into_iter()
            .unique()
            .filter(|a| u64::from(*a) >= from && self.is_excluded(*a))
            .count()
    }

    /// Total addresses in the block, `broadcast - network + 1`.
    pub fn total(&self) -> u64 {
        u64::from(self.broadcast) - u64::from(self.network) + 1
    }
}

/// Ascending iterator over the siblings of an address.
///
/// Holds only the next candidate and the subnet bounds, so any prefix
/// length (down to /0) costs O(1) memory. Cloning gives an independent
/// cursor at the same position.
#[derive(Debug, Clone)]
pub struct Siblings {
    bounds: SubnetBounds,
    next: u64,
}

impl Siblings {
    pub(crate) fn new(bounds: SubnetBounds) -> Siblings {
        Siblings {
            next: u64::from(bounds.network),
            bounds,
        }
    }

    /// Addresses still to be yielded, computed without iterating.
    pub fn remaining(&self) -> u64 {
        let end = u64::from(self.bounds.broadcast) + 1;
        if self.next >= end {
            return 0;
        }
        (end - self.next) - self.bounds.excluded_from(self.next) as u64
    }

    /// Restart from the first sibling.
    pub fn rewind(&mut self) {
        self.next = u64::from(self.bounds.network);
    }

    pub fn options(&self) -> SiblingOptions {
        self.bounds.options
    }
}

impl Iterator for Siblings {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        while self.next <= u64::from(self.bounds.broadcast) {
            let candidate = self.next as u32;
            self.next += 1;
            if self.bounds.is_excluded(candidate) {
                log::trace!("Skipping excluded {}", Ipv4Addr::from(candidate));
                continue;
            }
            return Some(Ipv4Addr::from(candidate));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Siblings {}
