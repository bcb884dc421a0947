//! Engine configuration.
//!
//! Defaults can be overridden from the environment (or a `.env` file loaded by
//! the binary through `dotenv`).

use std::str::FromStr;

/// Env var for the shallowest prefix a supernet chain may reach, minus one.
pub const ENV_SUPERNET_FLOOR: &str = "SUBNETCALC_SUPERNET_FLOOR";
/// Env var for the maximum number of enumerated blocks per query.
pub const ENV_MAX_ITEMS: &str = "SUBNETCALC_MAX_ITEMS";

/// Supernet chains stop this many bits short of `/0`.
pub const DEFAULT_SUPERNET_FLOOR: u8 = 8;
pub const DEFAULT_MAX_ITEMS: usize = 4096;
/// Largest accepted `max_items`; bigger values are capped to it.
pub const MAX_ITEMS_LIMIT: usize = 65_536;

/// Tunables for [`crate::evaluate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Supernet chains list `prefixlen - level` down to `floor + 1`.
    pub supernet_floor: u8,
    /// Cap on subnet/supernet/next/prev blocks listed for one query.
    pub max_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            supernet_floor: DEFAULT_SUPERNET_FLOOR,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Config {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let mut config = Config {
            supernet_floor: read_var(&lookup, ENV_SUPERNET_FLOOR, defaults.supernet_floor),
            max_items: read_var(&lookup, ENV_MAX_ITEMS, defaults.max_items),
        };
        if config.max_items > MAX_ITEMS_LIMIT {
            log::warn!(
                "Ignoring {ENV_MAX_ITEMS}={} above {MAX_ITEMS_LIMIT}, using default {}",
                config.max_items,
                defaults.max_items
            );
            config.max_items = defaults.max_items;
        }
        log::debug!("config={config:?}");
        config
    }

    /// `max_items` bounded by [`MAX_ITEMS_LIMIT`].
    pub fn item_limit(&self) -> usize {
        self.max_items.min(MAX_ITEMS_LIMIT)
    }
}

fn read_var<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {key}={raw:?}, using default {default}");
            default
        }),
    }
}
