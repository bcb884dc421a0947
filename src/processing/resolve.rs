//! Command tail parsing: `sub|sup|next|prev [N]` or `/NN`.
//!
//! Grammar, whitespace allowed between tokens:
//!
//! ```text
//! tail    := target | step
//! target  := '/' DIGITS
//! step    := WORD DIGITS?      WORD starts with sub, sup, next or prev
//! ```

use crate::error::ResolveError;
use crate::models::Network;
use std::fmt;

/// What to do with the source network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
    Sub,
    Sup,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
            Direction::Sub => "sub",
            Direction::Sup => "sup",
        };
        write!(f, "{name}")
    }
}

/// The two shapes a command tail can take, before looking at the source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Request {
    /// Keyword with an optional level.
    Step {
        direction: Direction,
        level: Option<u32>,
    },
    /// Absolute `/NN` prefix length.
    Target(u32),
}

/// A request normalized against the source network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub level: u32,
}

const KEYWORDS: [(&str, Direction); 4] = [
    ("sub", Direction::Sub),
    ("sup", Direction::Sup),
    ("next", Direction::Next),
    ("prev", Direction::Prev),
];

/// Parse and normalize a command tail against `source`.
pub fn resolve(tail: &str, source: &Network) -> Result<Command, ResolveError> {
    let command = parse_request(tail)?.against(source);
    log::debug!("resolve({tail:?}, {source}) -> {command:?}");
    Ok(command)
}

/// Parse a command tail without normalizing it.
pub fn parse_request(tail: &str) -> Result<Request, ResolveError> {
    let unrecognized = || ResolveError::Unrecognized(tail.trim().to_string());

    let mut cursor = Cursor::new(tail);
    cursor.skip_whitespace();
    let request = if cursor.eat('/') {
        cursor.skip_whitespace();
        Request::Target(cursor.number().ok_or_else(unrecognized)?)
    } else {
        let word = cursor.word().ok_or_else(unrecognized)?.to_ascii_lowercase();
        let direction = KEYWORDS
            .iter()
            .find(|(keyword, _)| word.starts_with(keyword))
            .map(|(_, direction)| *direction)
            .ok_or_else(unrecognized)?;
        cursor.skip_whitespace();
        Request::Step {
            direction,
            level: cursor.number(),
        }
    };

    cursor.skip_whitespace();
    if !cursor.is_empty() {
        return Err(unrecognized());
    }
    Ok(request)
}

impl Request {
    /// Turn a target prefix into a direction and level relative to `source`.
    pub fn against(self, source: &Network) -> Command {
        match self {
            Request::Step { direction, level } => Command {
                direction,
                level: level.unwrap_or(1),
            },
            Request::Target(target) => {
                let current = u32::from(source.prefixlen());
                if target < current {
                    Command {
                        direction: Direction::Sup,
                        level: current - target,
                    }
                } else {
                    Command {
                        direction: Direction::Sub,
                        level: target - current,
                    }
                }
            }
        }
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { rest: input }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map_or(self.rest.len(), |(i, _)| i);
        if end == 0 {
            return None;
        }
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(taken)
    }

    fn word(&mut self) -> Option<&'a str> {
        self.take_while(|c| c.is_ascii_alphabetic())
    }

    /// Decimal digits, saturating at `u32::MAX`.
    fn number(&mut self) -> Option<u32> {
        self.take_while(|c| c.is_ascii_digit()).map(|digits| {
            digits.bytes().fold(0u32, |acc, d| {
                acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
            })
        })
    }
}
