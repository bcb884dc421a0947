//! Subnetting (splitting into children) and supernetting (enclosing ancestors).

use crate::models::Network;

/// Children of a network `level` bits deeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnets {
    /// Level actually used, after clamping.
    pub level: u8,
    /// True if the requested level went past the maximum prefix length.
    pub clamped: bool,
    /// 2^level, `None` when it does not fit in a `u128`.
    pub total: Option<u128>,
    /// Children in address order; at most `limit` of them.
    pub children: Vec<Network>,
}

impl Subnets {
    pub fn capped(&self) -> bool {
        self.total
            .map_or(true, |total| (self.children.len() as u128) < total)
    }
}

/// Ancestors of a network, shallowest first removed from the origin by `level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supernets {
    /// Level actually used, after clamping.
    pub level: u8,
    /// True if the requested level went past `/0`.
    pub clamped: bool,
    /// Length of the full chain, before the item cap.
    pub total: usize,
    /// Chain entries as (levels above origin, network); at most `limit` of them.
    pub chain: Vec<(u8, Network)>,
}

impl Supernets {
    pub fn capped(&self) -> bool {
        self.chain.len() < self.total
    }
}

/// Split `net` into `2^level` children of prefix `net.prefixlen + level`.
///
/// A level past the family maximum is clamped. At most `limit` children are listed.
pub fn subnet(net: &Network, level: u32, limit: usize) -> Subnets {
    let max_level = net.host_bits();
    let clamped = level > u32::from(max_level);
    let level = if clamped { max_level } else { level as u8 };
    if clamped {
        log::warn!("subnet({net}) level clamped to {level}");
    }

    let prefixlen = net.prefixlen() + level;
    let total = 1u128.checked_shl(u32::from(level));
    let child_size = 1u128.checked_shl(u32::from(net.max_prefixlen() - prefixlen));
    let count = total.map_or(limit, |t| t.min(limit as u128) as usize);

    let base = net.network_address();
    let mut children = Vec::new();
    for index in 0..count as u128 {
        let offset = if index == 0 {
            Some(0)
        } else {
            child_size.and_then(|size| size.checked_mul(index))
        };
        let child = offset
            .and_then(|offset| base.checked_add(offset))
            .and_then(|addr| Network::from_parts(addr, prefixlen).ok());
        match child {
            Some(child) => children.push(child),
            None => break,
        }
    }
    log::debug!(
        "subnet({net}, {level}) listed {} of {total:?}",
        children.len()
    );

    Subnets {
        level,
        clamped,
        total,
        children,
    }
}

/// Enclosing networks from `net.prefixlen - level` up to `/(floor + 1)`.
///
/// The chain has `prefixlen - floor - level` entries (none if that is not positive).
/// A level past `/0` is clamped to the prefix length.
pub fn supernet(net: &Network, level: u32, floor: u8, limit: usize) -> Supernets {
    let clamped = level > u32::from(net.prefixlen());
    let level = if clamped { net.prefixlen() } else { level as u8 };
    if clamped {
        log::warn!("supernet({net}) level clamped to {level}");
    }

    let steps = i32::from(net.prefixlen()) - i32::from(floor) - i32::from(level);
    let total = steps.max(0) as usize;
    let chain: Vec<(u8, Network)> = (0..total as u8)
        .take(limit)
        .filter_map(|i| {
            let diff = level + i;
            net.supernet(diff).map(|sup| (diff, sup))
        })
        .collect();
    log::debug!(
        "supernet({net}, {level}) floor=/{floor} listed {} of {total}",
        chain.len()
    );

    Supernets {
        level,
        clamped,
        total,
        chain,
    }
}
