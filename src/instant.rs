//! The `Instant` value type: a point in time with or without an attached
//! timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::Error;

/// A point in time with nanosecond resolution.
///
/// An instant is either *naive* (no timezone attached) or *zoned* (wall-clock
/// time in a concrete IANA zone, carrying the correct UTC offset for that
/// moment). Universal (UTC) values are represented as naive instants whose
/// wall-clock fields are UTC; the conversion functions enforce that
/// convention and reject a zoned value wherever a universal one is required.
///
/// `Instant` is an immutable value type: every conversion returns a new
/// value and nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instant {
    /// Wall-clock fields with no timezone attached.
    Naive(NaiveDateTime),
    /// Wall-clock fields in a specific zone, offset included.
    Zoned(DateTime<Tz>),
}

impl Instant {
    /// Wraps a naive datetime.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Instant::Naive(dt)
    }

    /// Wraps a timezone-attached datetime.
    pub fn from_zoned(dt: DateTime<Tz>) -> Self {
        Instant::Zoned(dt)
    }

    /// The attached timezone, or `None` for a naive instant.
    pub fn timezone(&self) -> Option<Tz> {
        match self {
            Instant::Naive(_) => None,
            Instant::Zoned(dt) => Some(dt.timezone()),
        }
    }

    /// The wall-clock fields exactly as stored, without any conversion.
    ///
    /// For a zoned instant these are the local fields in its zone, not UTC.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Instant::Naive(dt) => *dt,
            Instant::Zoned(dt) => dt.naive_local(),
        }
    }

    /// True when no timezone is attached.
    pub fn is_naive(&self) -> bool {
        matches!(self, Instant::Naive(_))
    }

    /// True when a timezone is attached.
    pub fn is_zoned(&self) -> bool {
        matches!(self, Instant::Zoned(_))
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::Naive(dt)
    }
}

impl From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Instant::Zoned(dt)
    }
}

impl From<DateTime<Utc>> for Instant {
    /// Chrono's `Utc` is not a database zone, so a UTC datetime maps onto
    /// the naive representation universal values use by convention.
    fn from(dt: DateTime<Utc>) -> Self {
        Instant::Naive(dt.naive_utc())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instant::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Instant::Zoned(dt) => write!(
                f,
                "{}[{}]",
                dt.format("%Y-%m-%dT%H:%M:%S%.f%:z"),
                dt.timezone().name()
            ),
        }
    }
}

impl FromStr for Instant {
    type Err = Error;

    /// Parses the `Display` rendering back into an instant.
    ///
    /// Zoned values look like `2021-06-15T08:00:00-04:00[America/New_York]`;
    /// naive values are the bare datetime, with `T` or a space as the
    /// separator. The bracketed zone supplies the rules and the offset pins
    /// the absolute moment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_suffix(']') {
            if let Some((dt_part, zone)) = rest.rsplit_once('[') {
                let tz: Tz = zone
                    .parse()
                    .map_err(|_| Error::UnknownTimezone(zone.to_string()))?;
                let fixed = DateTime::parse_from_rfc3339(dt_part).map_err(|e| {
                    Error::InvalidArgument(format!("cannot parse '{dt_part}' as a datetime: {e}"))
                })?;
                return Ok(Instant::Zoned(fixed.with_timezone(&tz)));
            }
        }

        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
            .map_err(|e| {
                Error::InvalidArgument(format!("cannot parse '{s}' as a datetime: {e}"))
            })?;
        Ok(Instant::Naive(naive))
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
