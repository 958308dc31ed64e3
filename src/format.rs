//! Rendering universal instants as zone-local strings.

use chrono::format::{Item, StrftimeItems};

use crate::convert::into_zone;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::timezone::TimezoneRef;

/// Format used when the caller does not supply one, for example
/// `2021-06-15 08:00:00-0400`.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";

/// Renders a universal instant as a local-time string in the given zone.
///
/// The timezone is required. A universal value rendered without one would
/// silently print UTC wall-clock fields as if they were local, so the
/// conversion is forced into the call signature instead of defaulted.
///
/// `fmt` takes strftime-style specifiers and falls back to
/// [`DEFAULT_FORMAT`] when `None`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `dt` already carries a timezone
/// or when `fmt` contains an unsupported specifier, and
/// [`Error::UnknownTimezone`] when the zone name does not resolve.
pub fn format(dt: Instant, timezone: TimezoneRef, fmt: Option<&str>) -> Result<String> {
    let zoned = into_zone(dt, timezone)?;
    let fmt = fmt.unwrap_or(DEFAULT_FORMAT);

    let items: Vec<Item<'_>> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidArgument(format!(
            "invalid format string: {fmt}"
        )));
    }

    Ok(zoned.format_with_items(items.into_iter()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon_utc() -> Instant {
        Instant::Naive(
            NaiveDate::from_ymd_opt(2021, 6, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_default_format_includes_offset() {
        let rendered = format(noon_utc(), "America/New_York".into(), None).unwrap();
        assert_eq!(rendered, "2021-06-15 08:00:00-0400");
    }

    #[test]
    fn test_custom_format() {
        let rendered = format(noon_utc(), "Europe/Oslo".into(), Some("%H:%M")).unwrap();
        assert_eq!(rendered, "14:00");
    }

    #[test]
    fn test_unsupported_specifier_is_rejected() {
        let err = format(noon_utc(), "Europe/Oslo".into(), Some("%Q")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_trailing_percent_is_rejected() {
        let err = format(noon_utc(), "Europe/Oslo".into(), Some("%H:%M %")).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
