//! "Days until departure" feature.
//!
//! The departure date carries no time of day and is pinned to midnight UTC,
//! while `now` is a full instant. How the two are combined is selected by
//! [`DayOffsetMode`].

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{FareError, FareResult};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// How the day offset treats the time of day of `now`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DayOffsetMode {
    /// `floor((departure_midnight - now) / 1 day) + 1`, in milliseconds.
    ///
    /// Tomorrow is 1 for every instant today except exactly midnight, where
    /// it is 2.
    #[default]
    Instant,
    /// Whole calendar days between today (UTC) and the departure date.
    /// Agrees with `Instant` except at exactly midnight.
    Calendar,
}

impl fmt::Display for DayOffsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOffsetMode::Instant => f.write_str("instant"),
            DayOffsetMode::Calendar => f.write_str("calendar"),
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` departure date.
pub fn parse_departure_date(value: &str) -> FareResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| FareError::InvalidDate(format!("{:?}: {}", value, e)))
}

/// Days from `now` until `departure`.
///
/// Past dates are not rejected and give zero or negative offsets.
pub fn days_until_departure(departure: NaiveDate, now: DateTime<Utc>, mode: DayOffsetMode) -> i64 {
    match mode {
        DayOffsetMode::Instant => {
            let departure_ms = Utc
                .from_utc_datetime(&departure.and_time(NaiveTime::MIN))
                .timestamp_millis();
            let diff_ms = departure_ms - now.timestamp_millis();
            diff_ms.div_euclid(MILLIS_PER_DAY) + 1
        }
        DayOffsetMode::Calendar => (departure - now.date_naive()).num_days(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn date(s: &str) -> NaiveDate {
        parse_departure_date(s).unwrap()
    }

    #[test]
    fn test_tomorrow_late_evening() {
        let now = at("2026-10-19T23:59:59Z");
        let tomorrow = date("2026-10-20");
        assert_eq!(days_until_departure(tomorrow, now, DayOffsetMode::Instant), 1);
        assert_eq!(days_until_departure(tomorrow, now, DayOffsetMode::Calendar), 1);
    }

    #[test]
    fn test_tomorrow_exactly_midnight() {
        let now = at("2026-10-19T00:00:00Z");
        let tomorrow = date("2026-10-20");
        assert_eq!(days_until_departure(tomorrow, now, DayOffsetMode::Instant), 2);
        assert_eq!(days_until_departure(tomorrow, now, DayOffsetMode::Calendar), 1);
    }

    #[test]
    fn test_same_day() {
        let now = at("2026-10-19T09:30:00Z");
        let today = date("2026-10-19");
        assert_eq!(days_until_departure(today, now, DayOffsetMode::Instant), 0);
        assert_eq!(days_until_departure(today, now, DayOffsetMode::Calendar), 0);
    }

    #[test]
    fn test_ten_days_out() {
        let now = at("2026-10-19T14:00:00Z");
        let departure = date("2026-10-29");
        assert_eq!(days_until_departure(departure, now, DayOffsetMode::Instant), 10);
        assert_eq!(days_until_departure(departure, now, DayOffsetMode::Calendar), 10);
    }

    #[test]
    fn test_past_date_is_negative() {
        let now = at("2026-10-19T12:00:00Z");
        let past = date("2026-10-16");
        assert_eq!(days_until_departure(past, now, DayOffsetMode::Instant), -3);
        assert_eq!(days_until_departure(past, now, DayOffsetMode::Calendar), -3);
    }

    #[test]
    fn test_modes_agree_off_midnight() {
        let departure = date("2027-01-01");
        for hour in 1..24 {
            let now = at(&format!("2026-12-20T{:02}:15:00Z", hour));
            assert_eq!(
                days_until_departure(departure, now, DayOffsetMode::Instant),
                days_until_departure(departure, now, DayOffsetMode::Calendar),
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_dates() {
        assert!(matches!(
            parse_departure_date(""),
            Err(FareError::InvalidDate(_))
        ));
        assert!(parse_departure_date("2026-13-01").is_err());
        assert!(parse_departure_date("29/10/2026").is_err());
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_value(DayOffsetMode::Calendar).unwrap(), "calendar");
        assert_eq!(
            serde_json::from_str::<DayOffsetMode>("\"instant\"").unwrap(),
            DayOffsetMode::Instant
        );
        assert!(serde_json::from_str::<DayOffsetMode>("\"midnight\"").is_err());
    }
}
