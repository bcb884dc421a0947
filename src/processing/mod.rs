//! Subnet arithmetic.
//!
//! This module contains the operations a query dispatches to:
//! - [`describe`] - Static attributes of a network or host
//! - [`navigate`] - Next/previous aligned blocks
//! - [`subnetting`] - Splitting into subnets and listing supernets
//! - [`resolve`] - Parsing the command tail into a [`Command`]

mod describe;
mod navigate;
mod resolve;
mod subnetting;

// Re-export public functions
pub use describe::{describe, Descriptor, HostFacts, RangeFacts};
pub use navigate::{adjacent, step, Adjacent, Step};
pub use resolve::{parse_request, resolve, Command, Direction, Request};
pub use subnetting::{subnet, supernet, Subnets, Supernets};
