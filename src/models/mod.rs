//! Domain models for CIDR aggregation.
//!
//! This module contains the core data structures:
//! - [`Network`] - normalized IPv4/IPv6 CIDR block
//! - [`NetworkRegistry`] - surviving networks indexed by prefix length
//! - mask helpers shared by both address families

mod mask;
mod network;
mod registry;

// Re-export public types
pub use mask::{
    broadcast_addr, cut_addr, get_cidr_mask, get_host_mask, netmask_prefix_len, V4_MAX_LENGTH,
    V6_MAX_LENGTH,
};
pub use network::{Family, Network, Subnets};
pub use registry::NetworkRegistry;
