//! Punch model and timestamp parsing.
//!
//! A punch is a single start/end interval worked against a job. Raw punch
//! records carry their timestamps as strings; this module turns them into
//! validated [`Punch`] values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TimePunch;
use crate::error::{EngineError, EngineResult};

/// Naive date-time layouts accepted after the date/time separator is normalized to `T`.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Offset-carrying layouts not covered by RFC 3339.
const OFFSET_FORMATS: [&str; 1] = ["%Y-%m-%dT%H:%M%:z"];

const MICROSECONDS_PER_HOUR: i64 = 3_600_000_000;

/// Parses an ISO-8601-like timestamp.
///
/// The date and time may be separated by a space or a `T`. Seconds and
/// fractional seconds are optional, a bare date means midnight, and a
/// trailing UTC offset (`Z`, `+02:00`) converts the instant to UTC.
///
/// # Examples
///
/// ```
/// use punch_payroll::models::parse_timestamp;
///
/// let spaced = parse_timestamp("2022-02-18 09:27:00").unwrap();
/// let iso = parse_timestamp("2022-02-18T09:27").unwrap();
/// assert_eq!(spaced, iso);
///
/// assert!(parse_timestamp("18/02/2022 09:27").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> EngineResult<NaiveDateTime> {
    let trimmed = value.trim();
    let normalized = trimmed.replacen(' ', "T", 1);

    if let Ok(instant) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(instant.naive_utc());
    }

    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(&normalized, format) {
            return Ok(instant.naive_utc());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(datetime);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| EngineError::InvalidTimestamp {
            value: value.to_string(),
            message: "expected YYYY-MM-DD[ T]HH:MM[:SS[.fff]] with optional UTC offset"
                .to_string(),
        })
}

/// A validated punch: parsed timestamps, strictly positive duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    /// When the punch started.
    pub start: NaiveDateTime,
    /// When the punch ended.
    pub end: NaiveDateTime,
    /// The job the time is logged against.
    pub job: String,
}

impl Punch {
    /// Parses and validates a raw punch record.
    ///
    /// `employee` and `punch_index` only feed error messages.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidTimestamp`] if either timestamp is malformed
    /// - [`EngineError::InvalidPunch`] if `end` is not after `start`
    pub fn from_record(
        record: &TimePunch,
        employee: &str,
        punch_index: usize,
    ) -> EngineResult<Self> {
        let start = parse_timestamp(&record.start)?;
        let end = parse_timestamp(&record.end)?;

        if end <= start {
            return Err(EngineError::InvalidPunch {
                employee: employee.to_string(),
                punch_index,
                message: format!(
                    "end '{}' must be after start '{}'",
                    record.end, record.start
                ),
            });
        }

        if (end - start).num_microseconds().is_none() {
            return Err(EngineError::InvalidPunch {
                employee: employee.to_string(),
                punch_index,
                message: "punch duration is out of range".to_string(),
            });
        }

        Ok(Self {
            start,
            end,
            job: record.job.clone(),
        })
    }

    /// Returns the punch duration in fractional hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use punch_payroll::models::{parse_timestamp, Punch};
    /// use rust_decimal::Decimal;
    ///
    /// let punch = Punch {
    ///     start: parse_timestamp("2022-02-18 09:00").unwrap(),
    ///     end: parse_timestamp("2022-02-18 17:30").unwrap(),
    ///     job: "Shop - Laborer".to_string(),
    /// };
    /// assert_eq!(punch.hours(), Decimal::new(85, 1));
    /// ```
    pub fn hours(&self) -> Decimal {
        // Range checked in from_record; hand-built punches past ~292k years saturate.
        let micros = (self.end - self.start).num_microseconds().unwrap_or(i64::MAX);
        Decimal::from(micros) / Decimal::from(MICROSECONDS_PER_HOUR)
    }
}
