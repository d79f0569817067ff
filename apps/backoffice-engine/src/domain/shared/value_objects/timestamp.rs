//! Timestamp value object for temporal data.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger file timestamp layout (`yyyy-MM-dd HH:mm:ss`).
const LEDGER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A UTC timestamp for order and catalog records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime<Utc>.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp, truncated to whole seconds.
    ///
    /// Truncation keeps the ledger file format lossless: a timestamp
    /// written as `yyyy-MM-dd HH:mm:ss` parses back to an equal value.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self(now - chrono::Duration::nanoseconds(i64::from(now.timestamp_subsec_nanos())))
    }

    /// Parse from an ISO 8601 string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a valid ISO 8601 timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Parse from the ledger file layout (`yyyy-MM-dd HH:mm:ss`, UTC).
    ///
    /// # Errors
    ///
    /// Returns error if the string does not match the layout.
    pub fn parse_ledger(s: &str) -> Result<Self, chrono::ParseError> {
        let naive = NaiveDateTime::parse_from_str(s, LEDGER_FORMAT)?;
        Ok(Self(naive.and_utc()))
    }

    /// Format for the ledger file layout (`yyyy-MM-dd HH:mm:ss`).
    #[must_use]
    pub fn to_ledger(&self) -> String {
        self.0.format(LEDGER_FORMAT).to_string()
    }

    /// Get the inner DateTime<Utc>.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as ISO 8601 / RFC 3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Get the Unix timestamp in seconds.
    #[must_use]
    pub const fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
