//! Conversions between local time, universal time and UNIX timestamps.
//!
//! Universal values are naive instants whose wall-clock fields are UTC, the
//! convention shared by every function here. Each function validates its own
//! inputs and returns a fresh value; nothing is cached or mutated.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::timezone::TimezoneRef;

/// Returns the current moment as a naive instant holding the UTC wall clock.
///
/// This reads the system clock and is the only function in the crate with a
/// side effect.
pub fn now() -> Instant {
    Instant::Naive(Utc::now().naive_utc())
}

/// Converts a local-time instant to universal time.
///
/// Exactly one source for the timezone must be present: either `local_dt`
/// already carries one, or `timezone` names one and `local_dt` is naive.
/// When the wall time falls in a DST transition, the timezone database's
/// resolution is used: a repeated hour reads as standard time and a skipped
/// hour is mapped with the offset in force just before the jump.
///
/// # Arguments
/// * `local_dt` - The instant to convert
/// * `timezone` - The zone its wall-clock fields belong to, when `local_dt`
///   is naive
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when both or neither timezone source
/// is present, and [`Error::UnknownTimezone`] when a zone name does not
/// resolve.
pub fn to_universal(local_dt: Instant, timezone: Option<TimezoneRef>) -> Result<Instant> {
    let zoned = match (local_dt, timezone) {
        (Instant::Zoned(_), Some(_)) => {
            return Err(Error::InvalidArgument(
                "cannot use a timezone-aware instant with an explicit timezone argument"
                    .to_string(),
            ))
        }
        (Instant::Naive(naive), Some(timezone)) => attach(naive, timezone.resolve()?),
        (Instant::Zoned(dt), None) => dt,
        (Instant::Naive(_), None) => {
            return Err(Error::InvalidArgument(
                "explicit timezone required to convert a naive instant".to_string(),
            ))
        }
    };
    Ok(Instant::Naive(zoned.naive_utc()))
}

/// Converts a local-time instant to universal time.
///
/// Alias of [`to_universal`], named for symmetry with [`from_universal`].
pub fn from_local(local_dt: Instant, timezone: Option<TimezoneRef>) -> Result<Instant> {
    to_universal(local_dt, timezone)
}

/// Converts a universal instant to its local representation in a zone.
///
/// The result carries the resolved zone and the UTC offset in force at that
/// moment, DST included.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `dt` already carries a timezone
/// and [`Error::UnknownTimezone`] when the zone name does not resolve.
pub fn to_local(dt: Instant, timezone: TimezoneRef) -> Result<Instant> {
    into_zone(dt, timezone).map(Instant::Zoned)
}

/// Converts a universal instant to its local representation in a zone.
///
/// Alias of [`to_local`].
pub fn from_universal(dt: Instant, timezone: TimezoneRef) -> Result<Instant> {
    to_local(dt, timezone)
}

/// Converts an instant to whole seconds since 1970-01-01T00:00:00 UTC.
///
/// The wall-clock fields are read as UTC **even when a timezone is
/// attached**; no normalization to UTC happens first. Callers that pass
/// already-universal naive values get the expected timestamp, while a
/// zone-attached value yields the timestamp its local fields would have as
/// UTC. That reading is kept deliberately for compatibility with the
/// time-tuple epoch conversion this crate replaces. Sub-second precision is
/// dropped.
pub fn to_unix(dt: Instant) -> i64 {
    dt.naive_local().and_utc().timestamp()
}

/// Converts seconds since the UTC epoch to a naive universal instant.
///
/// Fractional seconds are preserved at nanosecond resolution, so
/// `from_unix(0.5)` lands half a second after the epoch and negative inputs
/// land before it.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for non-finite input or a timestamp
/// outside the representable datetime range.
pub fn from_unix(ut: f64) -> Result<Instant> {
    if !ut.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "UNIX timestamp must be finite, got {ut}"
        )));
    }

    let secs = ut.floor();
    let mut whole = secs as i64;
    let mut nanos = ((ut - secs) * 1_000_000_000.0).round() as u32;
    if nanos >= 1_000_000_000 {
        whole += 1;
        nanos = 0;
    }

    let dt = DateTime::from_timestamp(whole, nanos)
        .ok_or_else(|| Error::InvalidArgument(format!("UNIX timestamp {ut} is out of range")))?;
    Ok(Instant::Naive(dt.naive_utc()))
}

/// Resolves the zone and produces the zone-attached datetime for a
/// universal input. Shared by [`to_local`] and the formatting helper.
pub(crate) fn into_zone(dt: Instant, timezone: TimezoneRef) -> Result<DateTime<Tz>> {
    let naive = match dt {
        Instant::Naive(naive) => naive,
        Instant::Zoned(_) => {
            return Err(Error::InvalidArgument(
                "first argument to to_local() should be a universal time".to_string(),
            ))
        }
    };
    let tz = timezone.resolve()?;
    Ok(tz.from_utc_datetime(&naive))
}

/// Interprets naive wall-clock fields as local time in `tz`.
///
/// Transition handling follows the database rather than inventing a policy:
/// a wall time repeated by a backward jump takes the standard-time reading
/// (the later universal instant), and a wall time skipped by a forward jump
/// is mapped with the offset in force before the jump, which rolls it onto
/// the instant just past the gap.
fn attach(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, standard) => {
            log::debug!(
                "wall time {naive} is ambiguous in {}, using the standard-time reading",
                tz.name()
            );
            standard
        }
        LocalResult::None => {
            log::debug!(
                "wall time {naive} does not exist in {}, applying the pre-transition offset",
                tz.name()
            );
            let probe = naive - Duration::days(1);
            let offset = match tz.offset_from_local_datetime(&probe) {
                LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset.fix(),
                LocalResult::None => tz.offset_from_utc_datetime(&naive).fix(),
            };
            let utc = naive - Duration::seconds(i64::from(offset.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_attach_unambiguous() {
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        let attached = attach(naive(2021, 6, 15, 14, 0, 0), tz);
        // CEST is UTC+2 in June
        assert_eq!(attached.naive_utc(), naive(2021, 6, 15, 12, 0, 0));
    }

    #[test]
    fn test_attach_repeated_hour_reads_as_standard_time() {
        let tz: Tz = "America/New_York".parse().unwrap();
        // Clocks fell back at 2021-11-07 02:00 EDT, so 01:30 happened twice
        let attached = attach(naive(2021, 11, 7, 1, 30, 0), tz);
        assert_eq!(attached.naive_utc(), naive(2021, 11, 7, 6, 30, 0));
    }

    #[test]
    fn test_attach_skipped_hour_uses_pre_transition_offset() {
        let tz: Tz = "America/New_York".parse().unwrap();
        // Clocks sprang forward at 2021-03-14 02:00 EST; 02:30 never happened
        let attached = attach(naive(2021, 3, 14, 2, 30, 0), tz);
        assert_eq!(attached.naive_utc(), naive(2021, 3, 14, 7, 30, 0));
    }

    #[test]
    fn test_attach_skipped_hour_positive_offset_zone() {
        let tz: Tz = "Europe/Paris".parse().unwrap();
        // Clocks sprang forward at 2024-03-31 02:00 CET
        let attached = attach(naive(2024, 3, 31, 2, 30, 0), tz);
        assert_eq!(attached.naive_utc(), naive(2024, 3, 31, 1, 30, 0));
    }

    #[test]
    fn test_from_unix_fractional_floor_below_zero() {
        let instant = from_unix(-0.5).unwrap();
        let expected = naive(1969, 12, 31, 23, 59, 59)
            .checked_add_signed(Duration::milliseconds(500))
            .unwrap();
        assert_eq!(instant.naive_local(), expected);
    }

    #[test]
    fn test_from_unix_rejects_non_finite() {
        assert!(from_unix(f64::NAN).unwrap_err().is_invalid_argument());
        assert!(from_unix(f64::INFINITY).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_from_unix_rejects_out_of_range() {
        assert!(from_unix(1.0e30).unwrap_err().is_invalid_argument());
    }
}
