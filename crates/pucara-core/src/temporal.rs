//! # Calendar Date and Time Display
//!
//! Appointment dates and birth dates arrive from the API either as
//! `YYYY-MM-DD` or as a full ISO datetime (`2026-03-05T00:00:00.000Z`).
//! They are calendar days, not instants: converting them through a timezone
//! shifts a midnight-UTC value to the previous day for any viewer west of
//! Greenwich. Every helper here works on the date text directly and never
//! goes through an offset.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Render a calendar date as `DD-MM-YYYY`.
///
/// Only the part before `T` is considered. Values that do not split into
/// three `-` separated parts are returned unchanged.
///
/// ```
/// use pucara_core::temporal::format_date;
///
/// assert_eq!(format_date("2026-03-05"), "05-03-2026");
/// assert_eq!(format_date("2026-03-05T00:00:00.000Z"), "05-03-2026");
/// assert_eq!(format_date("mañana"), "mañana");
/// ```
pub fn format_date<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(raw) = input.into().filter(|s| !s.is_empty()) else {
        return String::new();
    };
    let parts: Vec<&str> = date_part(raw).split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}-{month}-{year}"),
        _ => raw.to_string(),
    }
}

/// Render a clock time as `HH:MM`, dropping seconds.
pub fn format_time<'a>(input: impl Into<Option<&'a str>>) -> String {
    input
        .into()
        .map(|s| s.chars().take(5).collect())
        .unwrap_or_default()
}

/// The `YYYY-MM-DD` part of a date or datetime, as sent back to the API.
pub fn date_for_submit<'a>(input: impl Into<Option<&'a str>>) -> String {
    input.into().map(date_part).unwrap_or_default().to_string()
}

/// `YYYY-MM-DD` from calendar fields, without any UTC conversion.
pub fn local_date_for_submit(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Time in the `HH:MM:SS` form the backend expects.
///
/// `HH:MM` gains `:00`; anything else is passed through.
pub fn time_for_submit<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        Some(t) if t.len() == 5 && t.contains(':') => format!("{t}:00"),
        Some(t) => t.to_string(),
        None => String::new(),
    }
}

/// Strictly parse the date part of a date or datetime.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] if the date part is not a real
/// `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let date = date_part(input.trim());
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| ValidationError::InvalidDate(format!("{input:?}: {e}")))
}

fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_plain_and_iso() {
        assert_eq!(format_date("2026-03-05"), "05-03-2026");
        assert_eq!(format_date("2026-03-05T00:00:00.000Z"), "05-03-2026");
        assert_eq!(format_date("2026-12-31T23:59:59-04:00"), "31-12-2026");
    }

    #[test]
    fn format_date_midnight_utc_keeps_calendar_day() {
        // A naive timezone conversion would render 31-12-2025 in Santiago.
        assert_eq!(format_date("2026-01-01T00:00:00Z"), "01-01-2026");
    }

    #[test]
    fn format_date_passes_through_unrecognized() {
        assert_eq!(format_date("05/03/2026"), "05/03/2026");
        assert_eq!(format_date("2026-03"), "2026-03");
    }

    #[test]
    fn format_date_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn format_time_truncates_seconds() {
        assert_eq!(format_time("14:30:00"), "14:30");
        assert_eq!(format_time("09:05"), "09:05");
        assert_eq!(format_time("9:5"), "9:5");
        assert_eq!(format_time(None), "");
    }

    #[test]
    fn date_for_submit_strips_time() {
        assert_eq!(date_for_submit("2026-03-05T00:00:00.000Z"), "2026-03-05");
        assert_eq!(date_for_submit("2026-03-05"), "2026-03-05");
        assert_eq!(date_for_submit(None), "");
    }

    #[test]
    fn local_date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(local_date_for_submit(date), "2026-03-05");
    }

    #[test]
    fn time_for_submit_adds_seconds() {
        assert_eq!(time_for_submit("14:30"), "14:30:00");
        assert_eq!(time_for_submit("14:30:15"), "14:30:15");
        assert_eq!(time_for_submit("1430"), "1430");
        assert_eq!(time_for_submit(None), "");
    }

    #[test]
    fn parse_date_accepts_real_dates() {
        let date = parse_date("2024-02-29T10:00:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(matches!(
            parse_date("2026-02-30"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(parse_date("05-03-2026").is_err());
        assert!(parse_date("").is_err());
    }
}
