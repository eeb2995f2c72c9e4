//! Timestamp-derived migration version identifiers
//!
//! A version is a 14-digit UTC timestamp (`YYYYMMDDHHMMSS`), optionally
//! followed by `-<name>` where the name is ornamental. Ordering compares the
//! decoded instant, never the raw string, so suffixes of varying length
//! cannot perturb it.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// Length of the timestamp prefix in characters
pub const TIMESTAMP_LEN: usize = 14;

/// chrono format string for the timestamp prefix
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A totally ordered migration version.
///
/// Equality and ordering use the decoded instant only. Equal instants are
/// legal input (the tool must not crash on them); all call sites sort with
/// stable sorts so equal versions keep discovery order.
#[derive(Debug, Clone)]
pub struct Version {
    instant: DateTime<Utc>,
    id: String,
}

impl Version {
    /// Parse a version from its identifier string.
    ///
    /// Accepts `YYYYMMDDHHMMSS` or `YYYYMMDDHHMMSS-<name>`. The name suffix
    /// is taken verbatim but must be non-empty and contain no whitespace.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let malformed = |reason: &str| CoreError::MalformedVersion {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };

        let prefix = raw
            .get(..TIMESTAMP_LEN)
            .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| malformed("timestamp prefix must be 14 decimal digits"))?;

        let naive = NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT)
            .map_err(|_| malformed("timestamp prefix has invalid calendar fields"))?;

        let suffix = &raw[TIMESTAMP_LEN..];
        if !suffix.is_empty() {
            let name = suffix
                .strip_prefix('-')
                .ok_or_else(|| malformed("name suffix must be separated by '-'"))?;
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(malformed(
                    "name suffix must be non-empty and contain no whitespace",
                ));
            }
        }

        Ok(Self {
            instant: naive.and_utc(),
            id: raw.to_string(),
        })
    }

    /// Build a version for a newly authored migration from the current UTC
    /// wall-clock time, truncated to whole seconds.
    pub fn now(name: &str) -> CoreResult<Self> {
        let stamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        Self::parse(&format!("{stamp}-{name}"))
    }

    /// The full identifier string, round-tripping the parsed input exactly.
    ///
    /// This is the externally visible version everywhere: reporting, the
    /// persisted target pointer, and tracking-table rows.
    pub fn as_identifier(&self) -> &str {
        &self.id
    }

    /// The decoded UTC instant used for ordering
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The ornamental name suffix, empty if absent
    pub fn name(&self) -> &str {
        self.id[TIMESTAMP_LEN..].strip_prefix('-').unwrap_or("")
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
