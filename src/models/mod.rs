//! Domain models for the subnet engine.
//!
//! This module contains the value types every query is built from:
//! - [`Address`] and [`Family`] - an IPv4/IPv6 address as raw bits
//! - [`Network`] - an address/prefix pair, parsed by [`parse`]
//! - [`Scope`] - special-purpose registry classification

mod address;
mod network;
mod scope;

// Re-export public types
pub use address::{
    broadcast_addr, cut_addr, get_cidr_mask, Address, Family, MAX_LENGTH_V4, MAX_LENGTH_V6,
};
pub use network::{parse, Network};
pub use scope::Scope;
