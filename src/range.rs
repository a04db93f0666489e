//! Inclusive intervals of [`Date`]s and the algebra over them.
//!
//! A [`Range`] has one of five shapes:
//!
//! | shape | variant | renders as |
//! |---|---|---|
//! | nothing at all | [`Range::Empty`] | `never` |
//! | `(-∞, +∞)` | [`Range::Forever`] | `forever` |
//! | `(-∞, end]` | [`Range::Until`] | `until 2016-02-29` |
//! | `[start, +∞)` | [`Range::Onward`] | `2016-02-01 onward` |
//! | `[start, end]` | [`Range::Between`] | `2016-02-01 to 2016-02-29` |
//!
//! Every operation returns a new range. Intersection and union never fail,
//! even when handed an inverted `Between` whose start lies after its end;
//! such a range is only reported by [`Range::error`] and [`Range::validate`].
//!
//! ```
//! use datespan::{Date, Range};
//! let year = Range::entire_year(2015);
//! let nov = Range::entire_month(2015, 11);
//! assert_eq!(year.intersection(&nov), Range::new(Date::new(2015, 11, 1), Date::new(2015, 11, 30)));
//! assert_eq!(nov.days(), 30);
//! ```

// used when rendering and reading ranges as JSON
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

// used to print out readable forms of a range
use std::fmt;

use crate::date::Date;
use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Range {
    Empty,
    Forever,
    Until(Date),
    Onward(Date),
    Between(Date, Date),
}

impl Range {
    pub fn empty() -> Range {
        Range::Empty
    }
    /// Alias for [`Range::empty`].
    pub fn never() -> Range {
        Range::Empty
    }
    pub fn forever() -> Range {
        Range::Forever
    }
    /// Alias for [`Range::forever`].
    pub fn infinity() -> Range {
        Range::Forever
    }
    /// The range from `start` to `end`, both inclusive. The order of the
    /// two dates is not checked here, see [`Range::validate`].
    pub fn new(start: Date, end: Date) -> Range {
        Range::Between(start, end)
    }
    /// A missing bound leaves that side of the range unbounded.
    pub fn from_bounds(start: Option<Date>, end: Option<Date>) -> Range {
        match (start, end) {
            (None, None) => Range::Forever,
            (None, Some(end)) => Range::Until(end),
            (Some(start), None) => Range::Onward(start),
            (Some(start), Some(end)) => Range::Between(start, end),
        }
    }
    pub fn single_day(date: Date) -> Range {
        Range::new(date, date)
    }
    pub fn only_today() -> Range {
        Range::single_day(Date::today())
    }
    /// Every day of the given month, with `month` rolling over like in
    /// [`Date::new`].
    ///
    /// # Panics
    ///
    /// If the month, or the first day after it, lies outside the dates
    /// chrono can represent. Build the bounds with [`Date::try_new`] and
    /// [`Date::checked_add_date`] to get an error instead.
    pub fn entire_month(year: i32, month: i32) -> Range {
        let first = Date::new(year, month, 1);
        Range::new(first, first.add_date(0, 1, -1))
    }
    /// Every day from January 1st to December 31st.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Range::entire_month`].
    pub fn entire_year(year: i32) -> Range {
        let first = Date::new(year, 1, 1);
        Range::new(first, first.add_date(1, 0, -1))
    }
    /// `[start, +∞)`
    pub fn start_bounded(start: Date) -> Range {
        Range::Onward(start)
    }
    /// `(-∞, end]`
    pub fn end_bounded(end: Date) -> Range {
        Range::Until(end)
    }

    /// The first day of the range, `None` when empty or unbounded on the left.
    pub fn start(&self) -> Option<Date> {
        match *self {
            Range::Onward(start) | Range::Between(start, _) => Some(start),
            _ => None,
        }
    }
    /// The last day of the range, `None` when empty or unbounded on the right.
    pub fn end(&self) -> Option<Date> {
        match *self {
            Range::Until(end) | Range::Between(_, end) => Some(end),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Range::Empty)
    }
    /// True when neither bound is present. This holds for the empty range
    /// as well, so check [`Range::is_empty`] first.
    pub fn is_zero(&self) -> bool {
        self.start().is_none() && self.end().is_none()
    }
    /// Alias for [`Range::is_zero`].
    pub fn is_infinity(&self) -> bool {
        self.is_zero()
    }

    /// The number of days in a bounded range. Empty, unbounded and inverted
    /// ranges all count as zero days.
    pub fn days(&self) -> i64 {
        match *self {
            Range::Between(start, end) if !start.after(end) => {
                end.as_naive().signed_duration_since(start.as_naive()).num_days() + 1
            }
            _ => 0,
        }
    }

    /// True if the other range lies entirely within this one. The empty
    /// range only contains the empty range, and everything is contained
    /// in [`Range::Forever`].
    pub fn contains(&self, other: &Range) -> bool {
        self.intersection(other) == *other
    }
    pub fn does_not_contain(&self, other: &Range) -> bool {
        !self.contains(other)
    }
    pub fn contains_date(&self, date: Date) -> bool {
        date.within(self)
    }
    pub fn overlaps(&self, other: &Range) -> bool {
        !self.intersection(other).is_empty()
    }

    /// The days both ranges have in common.
    pub fn intersection(&self, other: &Range) -> Range {
        if self.is_empty() || other.is_empty() {
            return Range::Empty;
        }
        // an absent start is open to the left and loses to any concrete one
        let start = match (self.start(), other.start()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let end = match (self.end(), other.end()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        match (start, end) {
            (Some(start), Some(end)) if start.after(end) => Range::Empty,
            _ => Range::from_bounds(start, end),
        }
    }

    /// The smallest single range covering both ranges. A gap between two
    /// disjoint ranges becomes part of the union.
    pub fn union(&self, other: &Range) -> Range {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let start = match (self.start(), other.start()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            _ => None,
        };
        let end = match (self.end(), other.end()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        Range::from_bounds(start, end)
    }

    pub fn equals(&self, other: &Range) -> bool {
        self == other
    }

    /// An error if both bounds are present and the start lies after the end.
    /// A single day, where start equals end, is allowed.
    pub fn error(&self) -> Option<Error> {
        match *self {
            Range::Between(start, end) if start.after(end) => Some(Error::RangeOrder { start, end }),
            _ => None,
        }
    }
    pub fn validate(&self) -> Result<()> {
        match self.error() {
            Some(e) => {
                warn!(range = ?self, "inverted date range");
                Err(e)
            }
            None => Ok(()),
        }
    }

    /// Walks the days of a bounded range in order. Empty, unbounded and
    /// inverted ranges yield nothing.
    pub fn iter(&self) -> RangeDays {
        match *self {
            Range::Between(start, end) if !start.after(end) => RangeDays { span: Some((start, end)) },
            _ => RangeDays { span: None },
        }
    }
}

pub struct RangeDays {
    // the next day to yield and the last day of the range
    span: Option<(Date, Date)>,
}
impl Iterator for RangeDays {
    type Item = Date;
    fn next(&mut self) -> Option<Date> {
        let (current, last) = self.span?;
        self.span = if current.before(last) {
            current.checked_add_days(1).ok().map(|next| (next, last))
        } else {
            None
        };
        Some(current)
    }
}
impl IntoIterator for &Range {
    type Item = Date;
    type IntoIter = RangeDays;
    fn into_iter(self) -> RangeDays {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Range::Empty => write!(f, "never"),
            Range::Forever => write!(f, "forever"),
            Range::Until(end) => write!(f, "until {}", end),
            Range::Onward(start) => write!(f, "{} onward", start),
            Range::Between(start, end) => write!(f, "{} to {}", start, end),
        }
    }
}

// the JSON shape of every non-empty range, absent fields are unbounded
#[derive(Serialize, Deserialize)]
struct Bounds {
    #[serde(default)]
    start: Option<Date>,
    #[serde(default)]
    end: Option<Date>,
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Range::Empty => serializer.serialize_none(),
            _ => Bounds { start: self.start(), end: self.end() }.serialize(serializer),
        }
    }
}
impl<'de> Deserialize<'de> for Range {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Range, D::Error> {
        Ok(match Option::<Bounds>::deserialize(deserializer)? {
            None => Range::Empty,
            Some(bounds) => Range::from_bounds(bounds.start, bounds.end),
        })
    }
}
