//! Subnet topology queries.
//!
//! - `topology` - Network prefix, host identifier, broadcast and counts
//! - [`Siblings`] - Lazy iterator over the addresses of a subnet

mod siblings;
mod topology;

// Re-export public functions
pub use siblings::Siblings;
pub use topology::{
    broadcast_address, host_identifier, network_prefix, resolve_inputs, sibling_count, siblings,
};
pub(crate) use topology::ipv4_siblings;
