//! Integration tests for subnet-calc
//!
//! These tests run whole queries through `evaluate` and check the result items.

use subnet_calc::config::Config;
use subnet_calc::error::{EngineError, ParseError, ResolveError};
use subnet_calc::models::{parse, Family};
use subnet_calc::processing::{adjacent, describe, step, subnet, supernet, Step};
use subnet_calc::{evaluate, evaluate_with, split_query};

#[test]
fn test_describe_v4_host() {
    let items = evaluate("192.168.1.5/32", "").expect("Failed to evaluate host");
    assert_eq!(items.len(), 1, "Expected a single descriptor item");

    let item = &items[0];
    assert_eq!(item.subtext, "IPv4 Host Private");
    let keys: Vec<&str> = item.facts.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["reverse", "hex", "bin"]);
    assert!(!keys.contains(&"network"));
    assert!(!keys.contains(&"broadcast"));
    assert_eq!(item.facts[0].copy_text, "5.1.168.192.in-addr.arpa");
}

#[test]
fn test_subnet_scenario() {
    let items = evaluate("10.0.0.0/24", "sub 2").expect("Failed to subnet");
    let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26", "10.0.0.192/26"]
    );
    let subtexts: Vec<&str> = items.iter().map(|i| i.subtext.as_str()).collect();
    assert_eq!(
        subtexts,
        vec!["1st Subnet", "2nd Subnet", "3rd Subnet", "4th Subnet"]
    );
}

#[test]
fn test_target_prefix_scenario() {
    let items = evaluate("10.0.0.0/24", "/30").expect("Failed to subnet to /30");
    assert_eq!(items.len(), 64);
    assert!(items.iter().all(|i| i.text.ends_with("/30")));
    assert_eq!(items[63].text, "10.0.0.252/30");
    assert_eq!(items[63].subtext, "64th Subnet");
}

#[test]
fn test_supernet_scenario_v6() {
    let items = evaluate("2001:db8::/32", "sup 1").expect("Failed to supernet");
    // 32 - 8 - 1 entries: /31 down to /9
    assert_eq!(items.len(), 23);
    assert_eq!(items[0].text, "2001:db8::/31");
    assert_eq!(items[0].subtext, "1st level Supernet");
    assert_eq!(items[22].text, "2000::/9");
    assert_eq!(items[22].subtext, "23rd level Supernet");
}

#[test]
fn test_malformed_scenario() {
    assert!(matches!(
        evaluate("256.0.0.1/24", ""),
        Err(EngineError::Parse(ParseError::Malformed { .. }))
    ));
}

#[test]
fn test_unrecognized_command() {
    assert!(matches!(
        evaluate("10.0.0.0/24", "sideways 3"),
        Err(EngineError::Resolve(ResolveError::Unrecognized(_)))
    ));
}

#[test]
fn test_next_prev_scenarios() {
    let items = evaluate("10.0.0.0/24", "next").expect("Failed next");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "10.0.1.0/24");
    assert_eq!(items[0].subtext, "next 1st /24 subnet");

    let items = evaluate("10.0.0.0/24", "prev 3").expect("Failed prev");
    let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["9.255.255.0/24", "9.255.254.0/24", "9.255.253.0/24"]);

    let items = evaluate("ffff:ffff:ffff:ffff::/64", "next 2").expect("Failed next at edge");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "advisory");
}

#[test]
fn test_clamp_advisories() {
    let items = evaluate("10.0.0.0/30", "sub 8").expect("Failed clamped subnet");
    assert_eq!(items[0].id, "advisory");
    assert_eq!(items.len(), 1 + 4);

    let items = evaluate("10.0.0.0/30", "/40").expect("Failed clamped target");
    assert_eq!(items[0].text, "we can't go lower than /32 - 2nd level");

    let items = evaluate("128.0.0.0/1", "sup 5").expect("Failed clamped supernet");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "we can't go higher than /0 - 1st level");
}

#[test]
fn test_huge_split_is_capped() {
    let config = Config {
        max_items: 16,
        ..Config::default()
    };
    let items = evaluate_with(&config, "2001:db8::/32", "/64").expect("Failed capped subnet");
    assert_eq!(items.len(), 17);
    assert_eq!(items[0].id, "advisory");
    assert!(items[0].text.contains("4294967296"));
}

#[test]
fn test_parse_then_describe_keeps_base() {
    for input in ["10.20.30.40/12", "192.168.1.5", "2001:db8:dead:beef::1/56", "::/0"] {
        let net = parse(input).expect("Failed to parse");
        let d = describe(&net);
        let again = parse(&d.network.to_string()).expect("Failed to reparse");
        assert_eq!(again, net, "{input}");
        assert_eq!(again.network_address().bits(), net.network_address().bits());
    }
}

#[test]
fn test_next_then_prev_is_identity() {
    for input in ["10.0.0.0/8", "192.0.2.64/26", "2001:db8::/64", "fe80::1"] {
        let net = parse(input).expect("Failed to parse");
        let next = step(&net, Step::Next, 1).expect("Failed next");
        let back = adjacent(&next, Step::Prev, 1, 10);
        assert_eq!(back.blocks, vec![net], "{input}");
    }
}

#[test]
fn test_subnet_partition_property() {
    for (input, level) in [("10.0.0.0/16", 4), ("2001:db8::/60", 4), ("0.0.0.0/0", 3)] {
        let net = parse(input).expect("Failed to parse");
        let subs = subnet(&net, level, 4096);
        assert_eq!(subs.children.len(), 1 << level);
        let mut expected = net.network_address();
        for child in &subs.children {
            assert_eq!(child.prefixlen(), net.prefixlen() + level as u8);
            assert_eq!(child.network_address(), expected, "gap or overlap in {input}");
            expected = match child.broadcast_address().checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        assert_eq!(
            subs.children.last().map(|c| c.broadcast_address()),
            Some(net.broadcast_address())
        );
    }
}

#[test]
fn test_supernet_subnet_back_contains_origin() {
    let net = parse("172.20.14.0/23").expect("Failed to parse");
    for level in 1..=10 {
        let sups = supernet(&net, level, 8, 4096);
        let (_, first) = sups.chain[0];
        assert!(subnet(&first, level, 4096).children.contains(&net));
    }
}

#[test]
fn test_split_then_evaluate() {
    let (address, tail) = split_query("  2001:db8::1   ");
    let items = evaluate(address, tail).expect("Failed to evaluate v6 host");
    assert_eq!(items[0].subtext, "IPv6 Host Private");
    assert_eq!(parse(address).unwrap().family(), Family::V6);
}

#[test]
fn test_scope_subtexts() {
    let items = evaluate("::ffff:8.8.8.8", "").expect("Failed to evaluate mapped host");
    assert_eq!(items[0].subtext, "IPv6 Host Private Reserved");

    let items = evaluate("169.254.1.1", "").expect("Failed to evaluate link-local host");
    assert_eq!(items[0].subtext, "IPv4 Host Private");
}

#[test]
fn test_supernet_level_zero_scenario() {
    let items = evaluate("10.1.2.0/24", "sup 0").expect("Failed sup 0");
    assert_eq!(items[0].text, "10.1.2.0/24");
    assert_eq!(items[0].subtext, "Network itself");
    assert_eq!(items[1].subtext, "1st level Supernet");
}

#[test]
fn test_oversized_max_items_is_bounded() {
    let config = Config {
        max_items: usize::MAX,
        ..Config::default()
    };
    let items = evaluate_with(&config, "2001:db8::/32", "/64").expect("Failed bounded subnet");
    assert_eq!(items.len(), config.item_limit() + 1);
    assert!(items[0].text.contains("4294967296"));
}
