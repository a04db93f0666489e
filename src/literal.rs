//! The textual range literal understood by PostgreSQL's `daterange`.
//!
//! A literal is either the token `empty` or a lower and an upper bound
//! between bracket markers, such as `[2015-03-01,2015-03-05)`. A square
//! bracket includes its bound, a parenthesis excludes it. A bound that is
//! left out, or spelled `infinity`, leaves that side unbounded. Bounds may
//! be quoted with `'` or `"`.
//!
//! In memory both ends of a [`Range`] are inclusive, so decoding moves an
//! excluded bound one day inwards.

// used to pick a literal apart without recompiling the pattern every time
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, trace};

use std::str::FromStr;

use crate::date::Date;
use crate::error::{Error, Result};
use crate::range::Range;

pub const EMPTY: &str = "empty";
pub const INFINITY: &str = "infinity";

lazy_static! {
    static ref LITERAL: Regex = Regex::new(r"^\s*([\[(])(.*)([\])])\s*$").unwrap();
}

/// How the upper bound of a range is written when encoding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndBound {
    /// `['2015-03-01','2015-03-04']`
    #[default]
    Inclusive,
    /// `['2015-03-01','2015-03-05')`, the form PostgreSQL itself prints.
    Exclusive,
}

pub fn encode(range: &Range, bound: EndBound) -> Result<String> {
    let (start, end) = match range {
        Range::Empty => return Ok(EMPTY.to_string()),
        _ => (range.start(), range.end()),
    };
    let start = start.map(|s| format!("'{}'", s)).unwrap_or_default();
    let (end, close) = match (end, bound) {
        (None, EndBound::Inclusive) => (String::new(), ']'),
        (None, EndBound::Exclusive) => (String::new(), ')'),
        (Some(e), EndBound::Inclusive) => (format!("'{}'", e), ']'),
        (Some(e), EndBound::Exclusive) => (format!("'{}'", e.checked_add_days(1)?), ')'),
    };
    Ok(format!("[{},{}{}", start, end, close))
}

fn decode_error(input: &str, message: impl Into<String>) -> Error {
    let message = message.into();
    debug!(input, %message, "failed to decode date range");
    Error::Decode { input: input.to_string(), message }
}

// None for an unbounded side
fn decode_bound(input: &str, side: &str) -> Result<Option<Date>> {
    let side = side.trim().trim_matches(|c: char| c == '\'' || c == '"');
    let lowered = side.to_lowercase();
    if lowered.is_empty() || lowered == INFINITY || lowered == "-infinity" || lowered == "+infinity" {
        return Ok(None);
    }
    match Date::parse(side) {
        Ok(date) => Ok(Some(date)),
        Err(e) => Err(decode_error(input, e.to_string())),
    }
}

pub fn decode(input: &str) -> Result<Range> {
    trace!(input, "decoding date range");
    if input.trim().eq_ignore_ascii_case(EMPTY) {
        return Ok(Range::Empty);
    }
    let captures = LITERAL
        .captures(input)
        .ok_or_else(|| decode_error(input, "expected the form [start,end] or empty"))?;
    let (lower, upper) = captures[2]
        .split_once(',')
        .ok_or_else(|| decode_error(input, "expected a comma between the bounds"))?;
    let lower_excluded = &captures[1] == "(";
    let upper_excluded = &captures[3] == ")";

    let start = decode_bound(input, lower)?;
    let end = decode_bound(input, upper)?;
    if let (Some(s), Some(e)) = (start, end) {
        if s.after(e) {
            return Err(decode_error(input, "lower bound lies after the upper bound"));
        }
    }

    let adjust = |bound: Option<Date>, days: i64| {
        bound
            .map(|d| d.checked_add_days(days))
            .transpose()
            .map_err(|e| decode_error(input, e.to_string()))
    };
    let start = if lower_excluded { adjust(start, 1)? } else { start };
    let end = if upper_excluded { adjust(end, -1)? } else { end };

    match (start, end) {
        // only excluded bounds get here crossed, as in [d,d) or (d,d+1)
        (Some(s), Some(e)) if s.after(e) => Ok(Range::Empty),
        _ => Ok(Range::from_bounds(start, end)),
    }
}

impl FromStr for Range {
    type Err = Error;
    fn from_str(s: &str) -> Result<Range> {
        decode(s)
    }
}
