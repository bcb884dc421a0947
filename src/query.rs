//! Splitting a raw query into the address token and the command tail.

use regex::Regex;
use std::sync::OnceLock;

/// Regex for `<address> <tail...>`, surrounding whitespace dropped.
static QUERY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_query_regex() -> &'static Regex {
    QUERY_REGEX.get_or_init(|| Regex::new(r"(?s)^\s*(\S*)\s*(.*?)\s*$").expect("Invalid Regex"))
}

/// Split `raw` at the first whitespace run.
///
/// Returns `(address_token, command_tail)`; either may be empty.
pub fn split_query(raw: &str) -> (&str, &str) {
    match get_query_regex().captures(raw) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => ("", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_query_with_tail() {
        assert_eq!(split_query("10.0.0.0/24 sub 2"), ("10.0.0.0/24", "sub 2"));
        assert_eq!(split_query("  10.0.0.0/24   /30  "), ("10.0.0.0/24", "/30"));
    }

    #[test]
    fn test_split_query_address_only() {
        assert_eq!(split_query("2001:db8::/32"), ("2001:db8::/32", ""));
        assert_eq!(split_query("2001:db8::/32 \n"), ("2001:db8::/32", ""));
    }

    #[test]
    fn test_split_query_empty() {
        assert_eq!(split_query(""), ("", ""));
        assert_eq!(split_query("   "), ("", ""));
    }
}
