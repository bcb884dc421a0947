//! Next/previous aligned blocks of the same prefix length.

use crate::error::NavigatorError;
use crate::models::Network;

/// Which way to walk the address space.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    pub fn describe(self) -> &'static str {
        match self {
            Step::Next => "next",
            Step::Prev => "previous",
        }
    }
}

/// Result of an [`adjacent`] walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacent {
    /// Blocks asked for.
    pub requested: u32,
    /// Blocks found, ordered by distance from the origin.
    pub blocks: Vec<Network>,
    /// Set when the walk hit the edge of the address space.
    pub stopped: Option<NavigatorError>,
}

impl Adjacent {
    /// True when fewer blocks were listed than requested because of the item cap.
    pub fn capped(&self) -> bool {
        self.stopped.is_none() && (self.blocks.len() as u64) < u64::from(self.requested)
    }
}

/// The block `distance` steps away from `net`, same prefix length.
pub fn step(net: &Network, direction: Step, distance: u32) -> Result<Network, NavigatorError> {
    let out_of_range = || NavigatorError::OutOfRange {
        origin: net.to_string(),
        family: net.family(),
        step: distance,
    };

    let offset = net
        .num_addresses()
        .and_then(|size| size.checked_mul(u128::from(distance)))
        .ok_or_else(out_of_range)?;

    let base = net.network_address();
    let moved = match direction {
        Step::Next => base.checked_add(offset),
        Step::Prev => base.checked_sub(offset),
    }
    .ok_or_else(out_of_range)?;

    Network::from_parts(moved, net.prefixlen()).map_err(|_| out_of_range())
}

/// List up to `count` blocks next to `net`, never more than `limit`.
///
/// Stops at the first block that would leave the address space.
pub fn adjacent(net: &Network, direction: Step, count: u32, limit: usize) -> Adjacent {
    let mut blocks = Vec::new();
    let mut stopped = None;

    for distance in (1..=count).take(limit) {
        match step(net, direction, distance) {
            Ok(block) => {
                log::trace!("{} {distance} of {net}: {block}", direction.describe());
                blocks.push(block);
            }
            Err(e) => {
                log::debug!("adjacent() stopped: {e}");
                stopped = Some(e);
                break;
            }
        }
    }

    Adjacent {
        requested: count,
        blocks,
        stopped,
    }
}
