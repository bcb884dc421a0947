//! Error types for the subnet engine.
//!
//! Every error here is recoverable: callers turn them into a result item
//! rather than aborting.

use crate::models::Family;
use thiserror::Error;

/// The address/prefix token could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a valid IPv4 or IPv6 address, or the prefix length is out of range.
    #[error("Malformed address/prefix '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

impl ParseError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        ParseError::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// The command tail matched neither `sub|sup|next|prev [N]` nor `/NN`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unrecognized command '{0}', expected /xx prefix or next|prev|sub|sup")]
    Unrecognized(String),
}

/// A next/prev step left the address space of the family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("Step {step} from {origin} leaves the {family} address space")]
    OutOfRange {
        origin: String,
        family: Family,
        step: u32,
    },
}

/// Errors returned by [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
