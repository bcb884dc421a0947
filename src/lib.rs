//! IPv4/IPv6 subnet calculator.
//!
//! Given an `address[/prefix]` token and an optional command tail, computes the
//! attributes of the network or lists next/previous blocks, subnets and supernets.
//!
//! ```
//! let items = subnet_calc::evaluate("10.0.0.0/24", "sub 2").unwrap();
//! assert_eq!(items.len(), 4);
//! assert_eq!(items[1].text, "10.0.0.64/26");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod query;

use config::Config;
use error::EngineError;
use models::Network;
use output::items::{adjacent_items, subnet_items, supernet_items};
use output::ResultItem;
use processing::{Direction, Step};

pub use query::split_query;

/// Evaluate a query with the default [`Config`].
pub fn evaluate(address_token: &str, command_tail: &str) -> Result<Vec<ResultItem>, EngineError> {
    evaluate_with(&Config::default(), address_token, command_tail)
}

/// Evaluate a query.
///
/// An empty `command_tail` describes the network in a single item. Otherwise the
/// tail is resolved into a command and one item is produced per listed block,
/// plus advisory items for clamps and truncation.
pub fn evaluate_with(
    config: &Config,
    address_token: &str,
    command_tail: &str,
) -> Result<Vec<ResultItem>, EngineError> {
    let net = models::parse(address_token)?;
    log::debug!("evaluate({address_token:?}, {command_tail:?}) net={net}");

    if command_tail.trim().is_empty() {
        let descriptor = processing::describe(&net);
        return Ok(vec![ResultItem::from(&descriptor)]);
    }

    let command = processing::resolve(command_tail, &net)?;
    log::debug!(
        "Chosen mode: {} level: {}",
        command.direction,
        command.level
    );

    let limit = config.item_limit();
    let items = match command.direction {
        Direction::Sub => {
            let subnets = processing::subnet(&net, command.level, limit);
            subnet_items(&net, &subnets)
        }
        Direction::Sup => {
            let supernets = processing::supernet(
                &net,
                command.level,
                config.supernet_floor,
                limit,
            );
            supernet_items(&supernets)
        }
        Direction::Next => walk_items(&net, Step::Next, command.level, limit),
        Direction::Prev => walk_items(&net, Step::Prev, command.level, limit),
    };
    Ok(items)
}

fn walk_items(net: &Network, step: Step, count: u32, limit: usize) -> Vec<ResultItem> {
    let walk = processing::adjacent(net, step, count, limit);
    adjacent_items(net, step, &walk)
}
