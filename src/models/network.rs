//! Network (address/prefix) values and the address/prefix parser.

use super::address::{broadcast_addr, cut_addr, get_cidr_mask, Address, Family};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Parse an `address[/prefix]` string into a [`Network`].
///
/// Host bits beyond the prefix are masked off rather than rejected.
pub fn parse(input: &str) -> Result<Network, ParseError> {
    Network::new(input)
}

/// A network: base address with all host bits zero, plus a prefix length.
///
/// A network whose prefix covers the whole address is a host.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Address,
    prefixlen: u8,
}

impl Network {
    /// Create a new [`Network`] from a string (e.g. `10.0.0.5/24`, `2001:db8::`).
    ///
    /// A missing prefix defaults to the family maximum. IPv4 also accepts a
    /// dotted netmask or hostmask in place of the prefix length.
    pub fn new(input: &str) -> Result<Network, ParseError> {
        let input = input.trim();
        let (addr_part, prefix_part) = match input.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (input, None),
        };

        let addr = if addr_part.contains(':') {
            Address::from(
                addr_part
                    .parse::<Ipv6Addr>()
                    .map_err(|_| ParseError::malformed(input, "invalid IPv6 address"))?,
            )
        } else {
            Address::from(
                addr_part
                    .parse::<Ipv4Addr>()
                    .map_err(|_| ParseError::malformed(input, "invalid IPv4 address"))?,
            )
        };

        let family = addr.family();
        let prefixlen = match prefix_part {
            None => family.max_prefixlen(),
            Some(p) => parse_prefix(input, family, p)?,
        };

        Network::from_parts(addr, prefixlen).map_err(|_| {
            ParseError::malformed(
                input,
                format!("prefix length exceeds /{}", family.max_prefixlen()),
            )
        })
    }

    /// Build a network from any address inside it.
    pub fn from_parts(addr: Address, prefixlen: u8) -> Result<Network, ParseError> {
        Ok(Network {
            addr: cut_addr(addr, prefixlen)?,
            prefixlen,
        })
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    pub fn prefixlen(&self) -> u8 {
        self.prefixlen
    }

    pub fn max_prefixlen(&self) -> u8 {
        self.family().max_prefixlen()
    }

    /// Number of host bits (`max_prefixlen - prefixlen`).
    pub fn host_bits(&self) -> u8 {
        self.max_prefixlen() - self.prefixlen
    }

    /// A single address, i.e. `/32` or `/128`.
    pub fn is_host(&self) -> bool {
        self.prefixlen == self.max_prefixlen()
    }

    /// Get the lowest (network) address.
    pub fn network_address(&self) -> Address {
        self.addr
    }

    /// Get the highest address; the broadcast address for IPv4.
    pub fn broadcast_address(&self) -> Address {
        // prefixlen is validated at construction
        broadcast_addr(self.addr, self.prefixlen).unwrap_or(self.addr)
    }

    pub fn netmask(&self) -> Address {
        let mask = get_cidr_mask(self.family(), self.prefixlen).unwrap_or(0);
        Address::new(self.family(), mask).unwrap_or(self.addr)
    }

    /// Wildcard mask, the complement of the netmask.
    pub fn hostmask(&self) -> Address {
        let bits = self.family().all_ones() ^ self.netmask().bits();
        Address::new(self.family(), bits).unwrap_or(self.addr)
    }

    /// Number of addresses in the block.
    ///
    /// Returns `None` only for `::/0`, whose size (2^128) does not fit in a `u128`.
    pub fn num_addresses(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.host_bits()))
    }

    /// The enclosing network `diff` bits shorter, `None` past `/0`.
    pub fn supernet(&self, diff: u8) -> Option<Network> {
        let prefixlen = self.prefixlen.checked_sub(diff)?;
        Network::from_parts(self.addr, prefixlen).ok()
    }

    /// True if `other` lies entirely inside this network.
    pub fn contains(&self, other: &Network) -> bool {
        self.family() == other.family()
            && self.prefixlen <= other.prefixlen
            && cut_addr(other.addr, self.prefixlen).ok() == Some(self.addr)
    }

    pub fn compressed(&self) -> String {
        format!("{}/{}", self.addr.compressed(), self.prefixlen)
    }

    pub fn exploded(&self) -> String {
        format!("{}/{}", self.addr.exploded(), self.prefixlen)
    }
}

/// Parse the part after `/`: decimal prefix length, or for IPv4 a dotted mask.
fn parse_prefix(input: &str, family: Family, prefix: &str) -> Result<u8, ParseError> {
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
        return prefix
            .parse::<u8>()
            .ok()
            .filter(|len| *len <= family.max_prefixlen())
            .ok_or_else(|| {
                ParseError::malformed(
                    input,
                    format!("prefix length exceeds /{}", family.max_prefixlen()),
                )
            });
    }

    if family == Family::V4 {
        if let Ok(mask) = prefix.parse::<Ipv4Addr>() {
            let bits = u32::from(mask);
            // netmask: contiguous leading ones
            if bits.leading_ones() + bits.trailing_zeros() == 32 {
                return Ok(bits.leading_ones() as u8);
            }
            // hostmask: contiguous trailing ones
            if bits.leading_zeros() + bits.trailing_ones() == 32 {
                return Ok(bits.leading_zeros() as u8);
            }
            return Err(ParseError::malformed(input, "non-contiguous netmask"));
        }
    }

    Err(ParseError::malformed(input, "invalid prefix length"))
}

impl FromStr for Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::new(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefixlen)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(de::Error::custom)
    }
}
