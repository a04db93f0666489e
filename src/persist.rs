// used for persistence
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
// rusqlite's own chrono conversions cover the timestamp columns
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

use crate::date::{is_iso8601, Date};
use crate::literal::{self, EndBound};
use crate::range::Range;

// ------------- Date --------------
impl ToSql for Date {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}
// Columns may hold a plain date, a timestamp in text form or a Unix
// timestamp in seconds. Timestamps are truncated to their UTC day.
impl FromSql for Date {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        if let ValueRef::Integer(seconds) = value {
            return Date::from_timestamp(seconds).map_err(|_| FromSqlError::OutOfRange(seconds));
        }
        let text = value.as_str()?;
        // only date shaped text goes through parse, which logs mismatches
        if is_iso8601(text) {
            if let Ok(date) = Date::parse(text) {
                return Ok(date);
            }
        }
        if let Ok(timestamp) = DateTime::<Utc>::column_result(value) {
            return Ok(Date::from_datetime(&timestamp));
        }
        NaiveDateTime::column_result(value)
            .map(|timestamp| Date::from(timestamp.date()))
            .inspect_err(|_| debug!(column = text, "column does not hold a date"))
    }
}

// ------------- Range --------------
impl ToSql for Range {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        literal::encode(self, EndBound::Inclusive)
            .map(ToSqlOutput::from)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }
}
impl FromSql for Range {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let bytes = match value {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => bytes,
            _ => return Err(FromSqlError::InvalidType),
        };
        let text = std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
        literal::decode(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
