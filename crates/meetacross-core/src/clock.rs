//! Civil-time conversion.
//!
//! Maps a UTC instant to the wall-clock time of a named zone, applying
//! whatever standard/daylight offset is in force at that instant.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::ZoneConversionError;

/// Wall-clock reading for one zone at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTime {
    /// Minutes since local midnight, in `0..1440`.
    pub minutes_since_midnight: u32,
    /// 12-hour display form, e.g. `9:30 PM`.
    pub display: String,
}

impl LocalTime {
    pub fn hour(&self) -> u32 {
        self.minutes_since_midnight / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes_since_midnight % 60
    }
}

/// Source of zone-aware wall-clock conversions.
pub trait CivilClock {
    fn local_time(
        &self,
        instant: DateTime<Utc>,
        zone_id: &str,
    ) -> Result<LocalTime, ZoneConversionError>;
}

/// [`CivilClock`] backed by the IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzClock;

impl CivilClock for TzClock {
    fn local_time(
        &self,
        instant: DateTime<Utc>,
        zone_id: &str,
    ) -> Result<LocalTime, ZoneConversionError> {
        let tz: Tz = zone_id
            .parse()
            .map_err(|_| ZoneConversionError::UnsupportedZone(zone_id.to_string()))?;
        let local = instant.with_timezone(&tz);
        Ok(LocalTime {
            minutes_since_midnight: local.hour() * 60 + local.minute(),
            display: local.format("%-I:%M %p").to_string(),
        })
    }
}

/// Format a UTC instant as a 12-hour clock time (`8:00 AM`).
pub fn format_utc_time(instant: DateTime<Utc>) -> String {
    instant.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn london_summer_is_one_hour_ahead() {
        let t = TzClock.local_time(at(2024, 6, 10, 8, 0), "Europe/London").unwrap();
        assert_eq!(t.minutes_since_midnight, 9 * 60);
        assert_eq!(t.display, "9:00 AM");
    }

    #[test]
    fn london_winter_matches_utc() {
        let t = TzClock.local_time(at(2024, 1, 10, 8, 0), "Europe/London").unwrap();
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 0);
    }

    #[test]
    fn midnight_is_zero_not_twenty_four() {
        let t = TzClock.local_time(at(2024, 6, 10, 15, 0), "Asia/Tokyo").unwrap();
        assert_eq!(t.minutes_since_midnight, 0);
        assert_eq!(t.display, "12:00 AM");
    }

    #[test]
    fn half_hour_offsets_are_kept() {
        let t = TzClock.local_time(at(2024, 6, 10, 0, 0), "Asia/Kolkata").unwrap();
        assert_eq!(t.minutes_since_midnight, 5 * 60 + 30);
        assert_eq!(t.display, "5:30 AM");
    }

    #[test]
    fn new_york_switches_offset_on_dst_day() {
        // 2024-03-10: EST until 07:00 UTC, EDT after.
        let before = TzClock.local_time(at(2024, 3, 10, 6, 30), "America/New_York").unwrap();
        let after = TzClock.local_time(at(2024, 3, 10, 7, 0), "America/New_York").unwrap();
        assert_eq!(before.display, "1:30 AM");
        assert_eq!(after.display, "3:00 AM");
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = TzClock.local_time(at(2024, 6, 10, 0, 0), "Mars/Olympus").unwrap_err();
        assert_eq!(err, ZoneConversionError::UnsupportedZone("Mars/Olympus".into()));
    }

    #[test]
    fn utc_time_uses_twelve_hour_clock() {
        assert_eq!(format_utc_time(at(2024, 6, 10, 13, 5)), "1:05 PM");
        assert_eq!(format_utc_time(at(2024, 6, 10, 0, 30)), "12:30 AM");
    }
}
