//! Static attributes of a network or host.

use crate::models::{Address, Family, Network, Scope};
use serde::Serialize;

/// Size of the whole IPv6 space, which does not fit in a `u128`.
const V6_SPACE: &str = "340282366920938463463374607431768211456";

/// Everything reported about a network without a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub network: Network,
    pub family: Family,
    pub is_host: bool,
    pub compressed: String,
    pub exploded: String,
    pub scope: Scope,
    /// Present for hosts only.
    pub host: Option<HostFacts>,
    /// Present for non-host networks only.
    pub range: Option<RangeFacts>,
}

/// Encodings of a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFacts {
    pub reverse_pointer: String,
    pub hex: String,
    pub bin: String,
}

/// Range attributes of a network with host bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeFacts {
    pub network_address: Address,
    pub netmask: Address,
    pub wildcard: Address,
    /// First usable address, IPv4 only.
    pub first: Option<Address>,
    /// IPv4: last usable address. IPv6: highest address in the range.
    pub last: Address,
    /// IPv4 only.
    pub broadcast: Option<Address>,
    /// Total address count as decimal text.
    pub num_addresses: String,
    pub network_hex: String,
    pub netmask_hex: String,
    /// Number of /64 blocks, IPv6 with `prefixlen <= 64` only.
    pub blocks_64: Option<u128>,
}

/// Compute the descriptor of a parsed network.
pub fn describe(net: &Network) -> Descriptor {
    log::debug!("describe({net}) is_host={}", net.is_host());
    let base = net.network_address();

    let host = net.is_host().then(|| HostFacts {
        reverse_pointer: base.reverse_pointer(),
        hex: base.hex(),
        bin: base.bin(),
    });
    let range = (!net.is_host()).then(|| range_facts(net));

    Descriptor {
        network: *net,
        family: net.family(),
        is_host: net.is_host(),
        compressed: net.compressed(),
        exploded: net.exploded(),
        scope: Scope::of_network(net),
        host,
        range,
    }
}

fn range_facts(net: &Network) -> RangeFacts {
    let base = net.network_address();
    let top = net.broadcast_address();
    let netmask = net.netmask();

    let (first, last, broadcast) = match net.family() {
        // No guard for /31: first and last cross over, as callers expect.
        Family::V4 => (
            Some(base.checked_add(1).unwrap_or(base)),
            top.checked_sub(1).unwrap_or(top),
            Some(top),
        ),
        Family::V6 => (None, top, None),
    };

    let blocks_64 = match net.family() {
        Family::V6 if net.prefixlen() <= 64 => 1u128.checked_shl(u32::from(64 - net.prefixlen())),
        _ => None,
    };

    RangeFacts {
        network_address: base,
        netmask,
        wildcard: net.hostmask(),
        first,
        last,
        broadcast,
        num_addresses: net
            .num_addresses()
            .map_or_else(|| V6_SPACE.to_string(), |n| n.to_string()),
        network_hex: base.hex(),
        netmask_hex: netmask.hex(),
        blocks_64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse;

    #[test]
    fn test_describe_v4_host() {
        let d = describe(&parse("192.168.1.5/32").unwrap());
        assert!(d.is_host);
        assert_eq!(d.family, Family::V4);
        assert!(d.scope.private);
        assert!(d.range.is_none());
        let host = d.host.unwrap();
        assert_eq!(host.reverse_pointer, "5.1.168.192.in-addr.arpa");
        assert_eq!(host.hex, "c0a80105");
    }

    #[test]
    fn test_describe_v4_network() {
        let d = describe(&parse("10.0.0.0/24").unwrap());
        assert!(!d.is_host);
        assert!(d.host.is_none());
        let r = d.range.unwrap();
        assert_eq!(r.network_address.to_string(), "10.0.0.0");
        assert_eq!(r.netmask.to_string(), "255.255.255.0");
        assert_eq!(r.wildcard.to_string(), "0.0.0.255");
        assert_eq!(r.first.unwrap().to_string(), "10.0.0.1");
        assert_eq!(r.last.to_string(), "10.0.0.254");
        assert_eq!(r.broadcast.unwrap().to_string(), "10.0.0.255");
        assert_eq!(r.num_addresses, "256");
        assert_eq!(r.network_hex, "0a000000");
        assert_eq!(r.netmask_hex, "ffffff00");
        assert_eq!(r.blocks_64, None);
    }

    #[test]
    fn test_describe_v4_slash_31() {
        let r = describe(&parse("10.0.0.0/31").unwrap()).range.unwrap();
        assert_eq!(r.first.unwrap().to_string(), "10.0.0.1");
        assert_eq!(r.last.to_string(), "10.0.0.0");
        assert_eq!(r.broadcast.unwrap().to_string(), "10.0.0.1");
        assert_eq!(r.num_addresses, "2");
    }

    #[test]
    fn test_describe_v4_slash_0() {
        let r = describe(&parse("0.0.0.0/0").unwrap()).range.unwrap();
        assert_eq!(r.first.unwrap().to_string(), "0.0.0.1");
        assert_eq!(r.last.to_string(), "255.255.255.254");
        assert_eq!(r.num_addresses, "4294967296");
    }

    #[test]
    fn test_describe_v6_network() {
        let d = describe(&parse("2001:db8::/48").unwrap());
        assert_eq!(d.exploded, "2001:0db8:0000:0000:0000:0000:0000:0000/48");
        let r = d.range.unwrap();
        assert_eq!(r.broadcast, None);
        assert_eq!(r.first, None);
        assert_eq!(r.last.to_string(), "2001:db8:0:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(r.blocks_64, Some(65536));
        assert_eq!(r.netmask.to_string(), "ffff:ffff:ffff::");
    }

    #[test]
    fn test_describe_v6_blocks_64_bounds() {
        let r = describe(&parse("2001:db8::/64").unwrap()).range.unwrap();
        assert_eq!(r.blocks_64, Some(1));
        let r = describe(&parse("2001:db8::/96").unwrap()).range.unwrap();
        assert_eq!(r.blocks_64, None);
        let r = describe(&parse("::/0").unwrap()).range.unwrap();
        assert_eq!(r.blocks_64, Some(1 << 64));
        assert_eq!(r.num_addresses, V6_SPACE);
    }

    #[test]
    fn test_descriptor_json() {
        let d = describe(&parse("10.0.0.0/24").unwrap());
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["network"], "10.0.0.0/24");
        assert_eq!(value["family"], "v4");
        assert_eq!(value["is_host"], false);
        assert_eq!(value["scope"]["private"], true);
        assert_eq!(value["host"], serde_json::Value::Null);
        assert_eq!(value["range"]["netmask"], "255.255.255.0");
        assert_eq!(value["range"]["num_addresses"], "256");
        assert_eq!(value["range"]["blocks_64"], serde_json::Value::Null);

        let d = describe(&parse("2001:db8::/48").unwrap());
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["family"], "v6");
        assert_eq!(value["range"]["blocks_64"], 65536);
        assert_eq!(value["range"]["first"], serde_json::Value::Null);
    }

    #[test]
    fn test_describe_v6_host() {
        let d = describe(&parse("::1").unwrap());
        assert!(d.is_host);
        assert!(d.scope.loopback);
        assert_eq!(d.host.unwrap().hex, "00000000000000000000000000000001");
    }
}
