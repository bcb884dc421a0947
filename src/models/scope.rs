//! Scope classification from the IANA special-purpose address registries.
//!
//! A block gets a flag only when a registry range contains the whole block,
//! i.e. both its lowest and highest address.

use super::address::{get_cidr_mask, Address, Family};
use super::network::Network;
use serde::Serialize;

/// A registry range stored as raw bits plus prefix length.
#[derive(Debug, Copy, Clone)]
struct Range {
    bits: u128,
    len: u8,
}

const fn v4(a: u8, b: u8, c: u8, d: u8, len: u8) -> Range {
    let bits = ((a as u128) << 24) | ((b as u128) << 16) | ((c as u128) << 8) | (d as u128);
    Range { bits, len }
}

const fn v6(segments: [u16; 8], len: u8) -> Range {
    let mut bits = 0u128;
    let mut i = 0;
    while i < 8 {
        bits = (bits << 16) | segments[i] as u128;
        i += 1;
    }
    Range { bits, len }
}

const V4_PRIVATE: &[Range] = &[
    v4(0, 0, 0, 0, 8),
    v4(10, 0, 0, 0, 8),
    v4(127, 0, 0, 0, 8),
    v4(169, 254, 0, 0, 16),
    v4(172, 16, 0, 0, 12),
    v4(192, 0, 0, 0, 24),
    v4(192, 0, 0, 170, 31),
    v4(192, 0, 2, 0, 24),
    v4(192, 168, 0, 0, 16),
    v4(198, 18, 0, 0, 15),
    v4(198, 51, 100, 0, 24),
    v4(203, 0, 113, 0, 24),
    v4(240, 0, 0, 0, 4),
    v4(255, 255, 255, 255, 32),
];
// PCP and TURN anycast, globally reachable despite 192.0.0.0/24
const V4_PRIVATE_EXCEPTIONS: &[Range] = &[v4(192, 0, 0, 9, 32), v4(192, 0, 0, 10, 32)];
const V4_SHARED: Range = v4(100, 64, 0, 0, 10);
const V4_LOOPBACK: Range = v4(127, 0, 0, 0, 8);
const V4_LINK_LOCAL: Range = v4(169, 254, 0, 0, 16);
const V4_MULTICAST: Range = v4(224, 0, 0, 0, 4);
const V4_RESERVED: Range = v4(240, 0, 0, 0, 4);

const V6_PRIVATE: &[Range] = &[
    v6([0, 0, 0, 0, 0, 0, 0, 1], 128),
    v6([0, 0, 0, 0, 0, 0, 0, 0], 128),
    v6([0, 0, 0, 0, 0, 0xffff, 0, 0], 96),
    v6([0x64, 0xff9b, 1, 0, 0, 0, 0, 0], 48),
    v6([0x100, 0, 0, 0, 0, 0, 0, 0], 64),
    v6([0x2001, 0, 0, 0, 0, 0, 0, 0], 23),
    v6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0], 32),
    v6([0x2001, 0x10, 0, 0, 0, 0, 0, 0], 28),
    v6([0x3fff, 0, 0, 0, 0, 0, 0, 0], 20),
    v6([0x5f00, 0, 0, 0, 0, 0, 0, 0], 16),
    v6([0xfc00, 0, 0, 0, 0, 0, 0, 0], 7),
    v6([0xfe80, 0, 0, 0, 0, 0, 0, 0], 10),
];
const V6_PRIVATE_EXCEPTIONS: &[Range] = &[
    v6([0x2001, 1, 0, 0, 0, 0, 0, 1], 128),
    v6([0x2001, 1, 0, 0, 0, 0, 0, 2], 128),
    v6([0x2001, 3, 0, 0, 0, 0, 0, 0], 32),
    v6([0x2001, 4, 0x112, 0, 0, 0, 0, 0], 48),
    v6([0x2001, 0x20, 0, 0, 0, 0, 0, 0], 28),
    v6([0x2001, 0x30, 0, 0, 0, 0, 0, 0], 28),
];
const V6_RESERVED: &[Range] = &[
    v6([0, 0, 0, 0, 0, 0, 0, 0], 8),
    v6([0x100, 0, 0, 0, 0, 0, 0, 0], 8),
    v6([0x200, 0, 0, 0, 0, 0, 0, 0], 7),
    v6([0x400, 0, 0, 0, 0, 0, 0, 0], 6),
    v6([0x800, 0, 0, 0, 0, 0, 0, 0], 5),
    v6([0x1000, 0, 0, 0, 0, 0, 0, 0], 4),
    v6([0x4000, 0, 0, 0, 0, 0, 0, 0], 3),
    v6([0x6000, 0, 0, 0, 0, 0, 0, 0], 3),
    v6([0x8000, 0, 0, 0, 0, 0, 0, 0], 3),
    v6([0xa000, 0, 0, 0, 0, 0, 0, 0], 3),
    v6([0xc000, 0, 0, 0, 0, 0, 0, 0], 3),
    v6([0xe000, 0, 0, 0, 0, 0, 0, 0], 4),
    v6([0xf000, 0, 0, 0, 0, 0, 0, 0], 5),
    v6([0xf800, 0, 0, 0, 0, 0, 0, 0], 6),
    v6([0xfe00, 0, 0, 0, 0, 0, 0, 0], 9),
];
const V6_LOOPBACK: Range = v6([0, 0, 0, 0, 0, 0, 0, 1], 128);
const V6_LINK_LOCAL: Range = v6([0xfe80, 0, 0, 0, 0, 0, 0, 0], 10);
const V6_MULTICAST: Range = v6([0xff00, 0, 0, 0, 0, 0, 0, 0], 8);

impl Range {
    fn contains(&self, addr: Address) -> bool {
        match get_cidr_mask(addr.family(), self.len) {
            Ok(mask) => addr.bits() & mask == self.bits,
            Err(_) => false,
        }
    }

    fn contains_block(&self, lo: Address, hi: Address) -> bool {
        self.contains(lo) && self.contains(hi)
    }

    fn touches_block(&self, lo: Address, hi: Address) -> bool {
        self.contains(lo) || self.contains(hi)
    }
}

/// Scope flags of an address block. Each flag is independent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub loopback: bool,
    pub global: bool,
    pub private: bool,
    pub multicast: bool,
    pub reserved: bool,
    pub unspecified: bool,
    pub link_local: bool,
}

impl Scope {
    /// Classify a network (a host network classifies its single address).
    pub fn of_network(net: &Network) -> Scope {
        let lo = net.network_address();
        let hi = net.broadcast_address();
        match net.family() {
            Family::V4 => Self::v4_block(lo, hi),
            Family::V6 => Self::v6_block(lo, hi),
        }
    }

    fn v4_block(lo: Address, hi: Address) -> Scope {
        let private = is_private(lo, hi, V4_PRIVATE, V4_PRIVATE_EXCEPTIONS);
        Scope {
            loopback: V4_LOOPBACK.contains_block(lo, hi),
            global: !private && !V4_SHARED.contains_block(lo, hi),
            private,
            multicast: V4_MULTICAST.contains_block(lo, hi),
            reserved: V4_RESERVED.contains_block(lo, hi),
            unspecified: lo.bits() == 0 && hi.bits() == 0,
            link_local: V4_LINK_LOCAL.contains_block(lo, hi),
        }
    }

    fn v6_block(lo: Address, hi: Address) -> Scope {
        // ::ffff:0:0/96 is a plain V6_PRIVATE entry, the embedded IPv4 address is not consulted
        let private = is_private(lo, hi, V6_PRIVATE, V6_PRIVATE_EXCEPTIONS);
        Scope {
            loopback: V6_LOOPBACK.contains_block(lo, hi),
            global: !private,
            private,
            multicast: V6_MULTICAST.contains_block(lo, hi),
            reserved: V6_RESERVED.iter().any(|r| r.contains_block(lo, hi)),
            unspecified: lo.bits() == 0 && hi.bits() == 0,
            link_local: V6_LINK_LOCAL.contains_block(lo, hi),
        }
    }

    /// Flag names shown in the subtext, in display order. `link_local` is not shown.
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.loopback, "Loopback"),
            (self.global, "Global"),
            (self.private, "Private"),
            (self.multicast, "Multicast"),
            (self.reserved, "Reserved"),
            (self.unspecified, "Unspecified"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

fn is_private(lo: Address, hi: Address, ranges: &[Range], exceptions: &[Range]) -> bool {
    ranges.iter().any(|r| r.contains_block(lo, hi))
        && !exceptions.iter().any(|r| r.touches_block(lo, hi))
}
