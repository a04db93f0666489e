// used for the calendar arithmetic underneath every Date
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
// used when rendering and reading dates as JSON
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
// so the strict ISO 8601 pattern doesn't have to be recompiled
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

// used to print out readable forms of a date
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::range::Range;

/// ISO 8601 is the default layout for parsing and rendering.
pub const ISO8601_DATE: &str = "%Y-%m-%d";

lazy_static! {
    // chrono alone would accept "15-3-1", we insist on "2015-03-01", or on
    // the signed form chrono prints outside of years 0 to 9999
    static ref ISO8601_PATTERN: Regex =
        Regex::new(r"^(?:[0-9]{4}|[+-][0-9]{4,})-[0-9]{2}-[0-9]{2}$").unwrap();
}

// True for text shaped like a date, whether or not the day exists.
pub(crate) fn is_iso8601(text: &str) -> bool {
    ISO8601_PATTERN.is_match(text)
}

/// A single calendar day in the proleptic Gregorian calendar, without any
/// time of day, as observed in UTC.
///
/// An absent date is an `Option<Date>` that is `None`, there is no reserved
/// "zero" day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Date(NaiveDate);

// moves a day by a signed number of days, None when leaving chrono's range
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

// months and days outside their usual bounds roll over into the
// neighbouring months and years, so month 13 is January of the next year
fn normalize(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    shift(first, i64::from(day) - 1)
}

impl Date {
    /// Creates the date for the given year, month and day, rolling
    /// components that are out of bounds over into neighbouring months.
    ///
    /// # Panics
    ///
    /// When the normalized date lies outside of what chrono can represent
    /// (roughly ±262,000 years). Use [`Date::try_new`] to handle that case.
    pub fn new(year: i32, month: i32, day: i32) -> Date {
        match Self::try_new(year, month, day) {
            Ok(date) => date,
            Err(e) => panic!("{e}"),
        }
    }
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Date> {
        normalize(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::OutOfRange(format!("{year}-{month}-{day} is not a representable date")))
    }
    /// Today's date in UTC.
    pub fn today() -> Date {
        Date(Utc::now().date_naive())
    }
    /// The calendar day of the timestamp, in the timestamp's own zone.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Date {
        Date(t.date_naive())
    }
    /// The UTC calendar day of a Unix timestamp given in seconds.
    pub fn from_timestamp(seconds: i64) -> Result<Date> {
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(|t| Date(t.date_naive()))
            .ok_or_else(|| Error::OutOfRange(format!("timestamp {seconds} is not a representable date")))
    }
    /// Parses a strict `YYYY-MM-DD` date. Years before 0 or after 9999 carry
    /// a sign and may have more digits, `-0001-01-01` or `+10000-01-01`, the
    /// same way they are displayed.
    pub fn parse(text: &str) -> Result<Date> {
        if !is_iso8601(text) {
            debug!(input = text, "date text is not formatted as YYYY-MM-DD");
            return Err(Error::Parse {
                input: text.to_string(),
                message: "does not match YYYY-MM-DD".to_string(),
            });
        }
        Self::parse_using_layout(ISO8601_DATE, text)
    }
    /// Parses a date using a strftime-like layout, such as `%d/%m/%Y`.
    pub fn parse_using_layout(layout: &str, text: &str) -> Result<Date> {
        NaiveDate::parse_from_str(text, layout)
            .map(Date)
            .map_err(|e| {
                debug!(input = text, layout, error = %e, "failed to parse date");
                Error::Parse { input: text.to_string(), message: e.to_string() }
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
    pub fn month(&self) -> u32 {
        self.0.month()
    }
    pub fn day(&self) -> u32 {
        self.0.day()
    }
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// # Panics
    ///
    /// When the result lies outside of what chrono can represent.
    pub fn add_days(&self, days: i64) -> Date {
        match self.checked_add_days(days) {
            Ok(date) => date,
            Err(e) => panic!("{e}"),
        }
    }
    pub fn checked_add_days(&self, days: i64) -> Result<Date> {
        shift(self.0, days)
            .map(Date)
            .ok_or_else(|| Error::OutOfRange(format!("{self} moved by {days} days")))
    }
    /// Adds years, months and days at once, with the same rollover as
    /// [`Date::new`]. January 31st plus one month is therefore March 3rd
    /// (or March 2nd in a leap year).
    ///
    /// # Panics
    ///
    /// When the result lies outside of what chrono can represent.
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Date {
        match self.checked_add_date(years, months, days) {
            Ok(date) => date,
            Err(e) => panic!("{e}"),
        }
    }
    pub fn checked_add_date(&self, years: i32, months: i32, days: i32) -> Result<Date> {
        let overflow = || Error::OutOfRange(format!("{self} moved by {years}y {months}m {days}d"));
        // month() and day() are at most 12 and 31
        let year = self.year().checked_add(years).ok_or_else(overflow)?;
        let month = (self.month() as i32).checked_add(months).ok_or_else(overflow)?;
        let day = (self.day() as i32).checked_add(days).ok_or_else(overflow)?;
        normalize(year, month, day).map(Date).ok_or_else(overflow)
    }

    /// True if this date is strictly before the other.
    pub fn before(&self, other: Date) -> bool {
        self.0 < other.0
    }
    /// True if this date is strictly after the other.
    pub fn after(&self, other: Date) -> bool {
        self.0 > other.0
    }
    pub fn equals(&self, other: Date) -> bool {
        self.0 == other.0
    }

    /// True if the date lies within the range, inclusive on both ends.
    /// Empty ranges contain nothing and unbounded sides impose nothing.
    pub fn within(&self, term: &Range) -> bool {
        match *term {
            Range::Empty => false,
            Range::Forever => true,
            Range::Until(end) => !self.after(end),
            Range::Onward(start) => !self.before(start),
            Range::Between(start, end) => !self.before(start) && !self.after(end),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO8601_DATE))
    }
}
impl FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Date> {
        Date::parse(s)
    }
}
impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Date {
        Date(d)
    }
}
impl From<Date> for NaiveDate {
    fn from(d: Date) -> NaiveDate {
        d.0
    }
}

// None renders as null through Option<Date>, so only real days end up here
impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text).map_err(de::Error::custom)
    }
}
