use chrono::{Local, NaiveDateTime, Timelike};
use thiserror::Error;

/// Wire format of the persisted appointment timestamp, e.g. "2025-03-14 16:45".
/// Minute precision, naive local time, no timezone.
pub const SCHEDULED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Error, Debug)]
#[error("invalid appointment timestamp {raw:?}: {source}")]
pub struct ScheduleParseError {
    pub raw: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parses the canonical timestamp format. The result always has
/// seconds == 0 because the format carries no sub-minute component.
pub fn parse_scheduled_at(raw: &str) -> Result<NaiveDateTime, ScheduleParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), SCHEDULED_AT_FORMAT).map_err(|source| {
        ScheduleParseError {
            raw: raw.to_string(),
            source,
        }
    })
}

pub fn format_scheduled_at(scheduled_at: NaiveDateTime) -> String {
    scheduled_at.format(SCHEDULED_AT_FORMAT).to_string()
}

/// Drops seconds and below for minute-level comparisons.
pub fn floor_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

/// Source of "now" for everything that compares against the appointment
/// time. Injected so monitors and the status facade can be driven through
/// simulated time in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time, matching how the appointment timestamp is
/// written (naive local, no offset).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_format() {
        let parsed = parse_scheduled_at("2025-03-14 16:45").unwrap();
        assert_eq!(format_scheduled_at(parsed), "2025-03-14 16:45");
        assert_eq!(parsed.second(), 0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let parsed = parse_scheduled_at("  2025-03-14 16:45\n").unwrap();
        assert_eq!(format_scheduled_at(parsed), "2025-03-14 16:45");
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_scheduled_at("garbage").unwrap_err();
        assert_eq!(err.raw, "garbage");
    }

    #[test]
    fn floor_drops_sub_minute_fields() {
        let with_seconds =
            NaiveDateTime::parse_from_str("2025-03-14 16:44:15", "%Y-%m-%d %H:%M:%S").unwrap();
        let floored = floor_to_minute(with_seconds);
        assert_eq!(floored.second(), 0);
        assert_eq!(floored.minute(), 44);
    }
}
