//! Timestamp recognition for scalar tokens.
//!
//! A token is a timestamp only if it fully matches the ISO 8601 date-time shape
//! `YYYY-MM-DDThh:mm[:ss][.fff][Z|±hh:mm]` and denotes a real instant. Everything
//! else stays text.
//!
//! ```rust
//! use thing_id::timestamp::recognize;
//!
//! let ts = recognize("2024-02-16T00:18:48.084Z").unwrap();
//! assert_eq!(ts.timestamp_subsec_millis(), 84);
//! assert!(recognize("London").is_none());
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

/// An instant with nanosecond precision and a UTC or fixed-offset designator.
pub type Timestamp = DateTime<FixedOffset>;

lazy_static! {
    static ref TIMESTAMP_PATTERN: Regex = Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>0[1-9]|1[0-2])-(?P<day>[0-2][1-9]|[1-3]0|3[01])T(?P<hour>[01][0-9]|2[0-3]):(?P<minute>[0-6][0-9])(?::(?P<second>[0-6][0-9]))?(?:\.(?P<millis>[0-9]{3}))?(?P<offset>Z|[+-][0-2][0-9]:[0-5][0-9])?$"
    )
    .unwrap();
}

/// Returns the timestamp denoted by `token`, or `None` if it is not one.
///
/// A missing offset designator is read as UTC. Shape matches that are not real
/// instants (February 30th, minute 61, offset `+29:00`) return `None`.
///
/// # Examples
///
/// ```rust
/// use thing_id::timestamp::recognize;
///
/// let ts = recognize("2024-02-16T10:30+02:00").unwrap();
/// assert_eq!(ts.offset().local_minus_utc(), 7200);
///
/// assert!(recognize("2024-02-30T10:30:00Z").is_none());
/// assert!(recognize("2024-02-16T10:30:00Z trailing").is_none());
/// ```
#[must_use]
pub fn recognize(token: &str) -> Option<Timestamp> {
    let caps = TIMESTAMP_PATTERN.captures(token)?;
    let ts = build(&caps);
    if ts.is_none() {
        debug!(token, "timestamp-shaped token is not a valid instant");
    }
    ts
}

fn build(caps: &Captures<'_>) -> Option<Timestamp> {
    let field = |name: &str| -> Option<u32> {
        caps.name(name).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field("month")?, field("day")?)?;
    let time = NaiveTime::from_hms_milli_opt(
        field("hour")?,
        field("minute")?,
        field("second")?,
        field("millis")?,
    )?;
    let offset = parse_offset(caps.name("offset").map(|m| m.as_str()))?;

    offset.from_local_datetime(&date.and_time(time)).single()
}

fn parse_offset(designator: Option<&str>) -> Option<FixedOffset> {
    match designator {
        None | Some("Z") => FixedOffset::east_opt(0),
        Some(text) => {
            let sign = if text.starts_with('-') { -1 } else { 1 };
            let hours: i32 = text.get(1..3)?.parse().ok()?;
            let minutes: i32 = text.get(4..6)?.parse().ok()?;
            FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        }
    }
}
