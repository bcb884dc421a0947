//! Result records handed to the front end.
//!
//! Each [`ResultItem`] is one reportable fact or one enumerated block. Copy
//! texts are captured per item when the item is built.

use crate::config::ENV_MAX_ITEMS;
use crate::models::{Family, Network};
use crate::processing::{Adjacent, Descriptor, Step, Subnets, Supernets};
use serde::Serialize;

/// Id used by advisory items (clamps, caps, address space edges).
pub const ADVISORY_ID: &str = "advisory";

/// One (key, label, copy text) entry of a result item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub key: String,
    pub label: String,
    pub copy_text: String,
}

impl Fact {
    fn new(key: &str, label: String, copy_text: String) -> Self {
        Fact {
            key: key.to_string(),
            label,
            copy_text,
        }
    }
}

/// A row of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub id: String,
    pub text: String,
    pub subtext: String,
    pub facts: Vec<Fact>,
}

impl ResultItem {
    pub fn advisory(text: String) -> Self {
        ResultItem {
            id: ADVISORY_ID.to_string(),
            text,
            subtext: String::new(),
            facts: vec![],
        }
    }

    pub fn is_advisory(&self) -> bool {
        self.id == ADVISORY_ID
    }

    /// An enumerated block with a single copy fact.
    fn block(id: String, net: &Network, subtext: String) -> Self {
        let text = net.to_string();
        ResultItem {
            id,
            facts: vec![Fact::new("copy", format!("Copy network {text}"), text.clone())],
            text,
            subtext,
        }
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st.
pub fn ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl From<&Descriptor> for ResultItem {
    fn from(d: &Descriptor) -> Self {
        let mut subtext = format!(
            "{} {}",
            d.family,
            if d.is_host { "Host" } else { "Net" }
        );
        for label in d.scope.labels() {
            subtext.push(' ');
            subtext.push_str(label);
        }

        let mut facts = Vec::new();
        if let Some(host) = &d.host {
            facts.push(Fact::new(
                "reverse",
                format!("Reverse Pointer {}", host.reverse_pointer),
                host.reverse_pointer.clone(),
            ));
            if d.family == Family::V6 {
                let base = d.network.network_address();
                facts.push(Fact::new(
                    "compressed",
                    format!("Compressed {}", base.compressed()),
                    base.compressed(),
                ));
                facts.push(Fact::new(
                    "exploded",
                    format!("Exploded {}", base.exploded()),
                    base.exploded(),
                ));
            }
            facts.push(Fact::new("hex", format!("Hex {}", host.hex), host.hex.clone()));
            facts.push(Fact::new("bin", format!("Bin {}", host.bin), host.bin.clone()));
        }

        if let Some(r) = &d.range {
            let prefixlen = d.network.prefixlen();
            let addr = |key: &str, name: &str, value: String| {
                Fact::new(key, format!("{name} {value}"), value)
            };
            facts.push(addr("network", "Network", r.network_address.to_string()));
            match d.family {
                Family::V4 => {
                    subtext.push_str(&format!(", max hosts {}", r.num_addresses));
                    facts.push(Fact::new(
                        "netmask",
                        format!("Netmask {} (= /{prefixlen})", r.netmask),
                        r.netmask.to_string(),
                    ));
                    if let Some(first) = r.first {
                        facts.push(addr("first", "First", first.to_string()));
                    }
                    facts.push(addr("last", "Last", r.last.to_string()));
                    if let Some(broadcast) = r.broadcast {
                        facts.push(addr("broadcast", "Broadcast", broadcast.to_string()));
                    }
                }
                Family::V6 => {
                    if let Some(blocks) = r.blocks_64 {
                        subtext.push_str(&format!(", contains {blocks} /64"));
                    }
                    facts.push(addr("compressed", "Compressed", d.compressed.clone()));
                    facts.push(addr("exploded", "Exploded", d.exploded.clone()));
                    facts.push(addr("last", "Last", r.last.to_string()));
                    facts.push(Fact::new(
                        "netmask",
                        format!("Netmask {} (= /{prefixlen})", r.netmask),
                        r.netmask.to_string(),
                    ));
                }
            }
            facts.push(addr("wildcard", "Wildcard", r.wildcard.to_string()));
            facts.push(addr("max", "Max Addr", r.num_addresses.clone()));
            facts.push(addr("networkhex", "Network Hex", r.network_hex.clone()));
            facts.push(Fact::new(
                "netmaskhex",
                format!("Mask Hex {} (= /{prefixlen})", r.netmask_hex),
                r.netmask_hex.clone(),
            ));
            if let Some(blocks) = r.blocks_64 {
                facts.push(addr("blocks64", "/64 Blocks", blocks.to_string()));
            }
        }

        ResultItem {
            id: d.network.to_string(),
            text: d.compressed.clone(),
            subtext,
            facts,
        }
    }
}

/// Items for a subnet split, clamp and cap advisories first.
pub fn subnet_items(net: &Network, subnets: &Subnets) -> Vec<ResultItem> {
    let mut items = Vec::with_capacity(subnets.children.len() + 2);
    if subnets.clamped {
        items.push(ResultItem::advisory(format!(
            "we can't go lower than /{} - {} level",
            net.max_prefixlen(),
            ordinal(u64::from(subnets.level))
        )));
    }
    if subnets.capped() {
        let total = subnets
            .total
            .map_or_else(|| "2^128".to_string(), |t| t.to_string());
        items.push(cap_advisory(subnets.children.len(), &total));
    }
    items.extend(subnets.children.iter().enumerate().map(|(i, child)| {
        ResultItem::block(
            format!("subnet_{child}"),
            child,
            format!("{} Subnet", ordinal(i as u64 + 1)),
        )
    }));
    items
}

/// Items for a supernet chain, clamp and cap advisories first.
///
/// Level 0 (`sup 0`) is the origin network and is labelled as such.
pub fn supernet_items(supernets: &Supernets) -> Vec<ResultItem> {
    let mut items = Vec::with_capacity(supernets.chain.len() + 2);
    if supernets.clamped {
        items.push(ResultItem::advisory(format!(
            "we can't go higher than /0 - {} level",
            ordinal(u64::from(supernets.level))
        )));
    }
    if supernets.capped() {
        items.push(cap_advisory(
            supernets.chain.len(),
            &supernets.total.to_string(),
        ));
    }
    items.extend(supernets.chain.iter().map(|(level, sup)| {
        let subtext = match *level {
            0 => "Network itself".to_string(),
            _ => format!("{} level Supernet", ordinal(u64::from(*level))),
        };
        ResultItem::block(format!("supernet_{level}"), sup, subtext)
    }));
    items
}

/// Items for a next/prev walk; an advisory is appended when the walk stopped short.
pub fn adjacent_items(net: &Network, direction: Step, walk: &Adjacent) -> Vec<ResultItem> {
    let prefix = match direction {
        Step::Next => "next",
        Step::Prev => "prev",
    };
    let mut items: Vec<ResultItem> = walk
        .blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let n = i as u64 + 1;
            ResultItem::block(
                format!("{prefix}_{n}"),
                block,
                format!(
                    "{} {} /{} subnet",
                    direction.describe(),
                    ordinal(n),
                    net.prefixlen()
                ),
            )
        })
        .collect();

    if let Some(e) = &walk.stopped {
        items.push(ResultItem::advisory(e.to_string()));
    } else if walk.capped() {
        items.push(cap_advisory(walk.blocks.len(), &walk.requested.to_string()));
    }
    items
}

fn cap_advisory(shown: usize, total: &str) -> ResultItem {
    ResultItem::advisory(format!(
        "showing the first {shown} of {total} blocks, raise {ENV_MAX_ITEMS} to see more"
    ))
}
