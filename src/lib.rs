//! Datespan – calendar dates and the algebra of date ranges.
//!
//! Datespan works at the granularity of whole days:
//! * A [`Date`] is a single day of the proleptic Gregorian calendar, as
//!   observed in UTC. Constructors roll out-of-range months and days over,
//!   so `Date::new(2015, 13, 1)` is the first of January 2016.
//! * A [`Range`] is an inclusive interval of dates that may be empty,
//!   bounded, unbounded on one side, or unbounded on both.
//!
//! Ranges support containment, intersection, union (the convex hull, so
//! gaps are bridged), overlap tests and day counts.
//!
//! ## Modules
//! * [`date`] – The [`Date`] value, its arithmetic and ISO 8601 text form.
//! * [`range`] – The [`Range`] variants and their algebra.
//! * [`literal`] – The PostgreSQL `daterange` text literal (`[a,b)`, `empty`).
//! * [`persist`] – `rusqlite` column conversions for dates and ranges.
//! * [`settings`] – Settings read through the `config` crate.
//! * [`logging`] – `tracing` subscriber setup.
//!
//! ## Serialization
//! With serde a date is the string `"YYYY-MM-DD"`, and an absent
//! `Option<Date>` is `null`. The empty range is `null`, every other range is
//! an object with a `start` and an `end`, where `null` marks an unbounded side.
//!
//! ## Quick Start
//! ```
//! use datespan::{Date, Range};
//! let year = Range::entire_year(2015);
//! let jan = Range::entire_month(2016, 1);
//! let union = year.union(&jan);
//! assert_eq!(union.to_string(), "2015-01-01 to 2016-01-31");
//! assert_eq!(Range::entire_month(2016, 2).days(), 29);
//! assert!(Date::new(2015, 11, 30).within(&Range::start_bounded(Date::new(2015, 11, 1))));
//! let decoded: Range = "[2015-03-01,2015-03-05)".parse().unwrap();
//! assert_eq!(decoded.end(), Some(Date::new(2015, 3, 4)));
//! ```

pub mod date;
pub mod error;
pub mod literal;
pub mod logging;
pub mod persist;
pub mod range;
pub mod settings;

pub use date::Date;
pub use error::{Error, Result};
pub use literal::EndBound;
pub use range::Range;
pub use settings::Settings;
