//! Value types for mask and subnet calculations.
//!
//! This module contains the core data structures:
//! - [`bit_buffer`] - Bitwise operations over byte buffers
//! - [`NetworkMask`] - Immutable IPv4 prefix mask
//! - [`SiblingOptions`] - Inclusion flags for sibling enumeration
//! - [`Subnet`] - Address with mask in `a.b.c.d/nn` notation

mod address;
pub mod bit_buffer;
mod netmask;
mod sibling_options;
mod subnet;

// Re-export public types
pub use address::{parse_address_bytes, require_ipv4, require_present, IPV4_LENGTH};
pub use netmask::{NetworkMask, MASK_LENGTH, MAX_LENGTH};
pub use sibling_options::SiblingOptions;
pub use subnet::Subnet;
