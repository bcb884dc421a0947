//! IPv4/IPv6 address values and mask utilities.
//!
//! Provides [`Address`], a family tag plus the address bits widened to `u128`,
//! along with the mask helpers every other module builds on.

use crate::error::ParseError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Maximum prefix length for IPv4 (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for IPv6 (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub fn max_prefixlen(self) -> u8 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }

    /// The all-ones address of this family.
    pub fn all_ones(self) -> u128 {
        match self {
            Family::V4 => u128::from(u32::MAX),
            Family::V6 => u128::MAX,
        }
    }

    pub fn version(self) -> u8 {
        match self {
            Family::V4 => 4,
            Family::V6 => 6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IPv{}", self.version())
    }
}

/// Convert a prefix length to a netmask for the given family.
///
/// # Examples
/// ```
/// use subnet_calc::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::V4, 24).unwrap(), 0xFFFF_FF00);
/// assert_eq!(get_cidr_mask(Family::V6, 0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Result<u128, ParseError> {
    let max = family.max_prefixlen();
    if len > max {
        return Err(ParseError::malformed(
            &format!("/{len}"),
            format!("prefix length exceeds /{max}"),
        ));
    }
    let right_len = u32::from(max - len);
    let mask = family
        .all_ones()
        .checked_shr(right_len)
        .and_then(|bits| bits.checked_shl(right_len))
        .unwrap_or(0);
    Ok(mask)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, ParseError> {
    let mask = get_cidr_mask(addr.family, len)?;
    Ok(Address {
        family: addr.family,
        bits: addr.bits & mask,
    })
}

/// Get the highest address for a given address and prefix length.
///
/// For IPv4 this is the broadcast address.
pub fn broadcast_addr(addr: Address, len: u8) -> Result<Address, ParseError> {
    let mask = get_cidr_mask(addr.family, len)?;
    let host_bits = addr.family.all_ones() ^ mask;
    Ok(Address {
        family: addr.family,
        bits: (addr.bits & mask) | host_bits,
    })
}

/// An IPv4 or IPv6 address.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address {
    family: Family,
    bits: u128,
}

impl Address {
    /// Build an address from raw bits. Returns `None` if `bits` do not fit the family.
    pub fn new(family: Family, bits: u128) -> Option<Address> {
        (bits <= family.all_ones()).then_some(Address { family, bits })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn checked_add(&self, offset: u128) -> Option<Address> {
        self.bits
            .checked_add(offset)
            .and_then(|bits| Address::new(self.family, bits))
    }

    pub fn checked_sub(&self, offset: u128) -> Option<Address> {
        self.bits
            .checked_sub(offset)
            .map(|bits| Address { family: self.family, bits })
    }

    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.bits)),
        }
    }

    /// Big-endian bytes, 4 or 16 of them.
    pub fn packed(&self) -> Vec<u8> {
        match self.to_ip() {
            IpAddr::V4(ip) => ip.octets().to_vec(),
            IpAddr::V6(ip) => ip.octets().to_vec(),
        }
    }

    /// Shortest textual form (`2001:db8::1`).
    pub fn compressed(&self) -> String {
        self.to_ip().to_string()
    }

    /// All groups written out; IPv4 has a single form.
    pub fn exploded(&self) -> String {
        match self.to_ip() {
            IpAddr::V4(ip) => ip.to_string(),
            IpAddr::V6(ip) => ip.segments().iter().map(|s| format!("{s:04x}")).join(":"),
        }
    }

    pub fn hex(&self) -> String {
        self.packed().iter().map(|b| format!("{b:02x}")).join("")
    }

    pub fn bin(&self) -> String {
        self.packed().iter().map(|b| format!("{b:08b}")).join("")
    }

    /// PTR name, `5.1.168.192.in-addr.arpa` or the nibble form under `ip6.arpa`.
    pub fn reverse_pointer(&self) -> String {
        match self.to_ip() {
            IpAddr::V4(ip) => format!(
                "{}.in-addr.arpa",
                ip.octets().iter().rev().map(|o| o.to_string()).join(".")
            ),
            IpAddr::V6(_) => format!("{}.ip6.arpa", self.hex().chars().rev().join(".")),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => Address::from(ip),
            IpAddr::V6(ip) => Address::from(ip),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address {
            family: Family::V4,
            bits: u128::from(u32::from(ip)),
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address {
            family: Family::V6,
            bits: u128::from(ip),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.compressed())
    }
}
