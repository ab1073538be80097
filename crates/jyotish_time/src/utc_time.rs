//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the calendar instant carried through every calculation.
//! Leap seconds are not modelled: one day is always 86 400 s, which is
//! the resolution the sidereal calculations work at.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar instant for a Julian Date, rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let total_ms = ((jd + 0.5) * MILLIS_PER_DAY).round();
        let day_number = (total_ms / MILLIS_PER_DAY).floor();
        let ms_of_day = total_ms - day_number * MILLIS_PER_DAY;

        // day_number is the JD of the preceding noon + 0.5, i.e. midnight.
        let (year, month, day_frac) = jd_to_calendar(day_number - 0.5);
        let day = day_frac.round() as u32;

        let hour = (ms_of_day / 3_600_000.0).floor();
        let minute = ((ms_of_day - hour * 3_600_000.0) / 60_000.0).floor();
        let second = (ms_of_day - hour * 3_600_000.0 - minute * 60_000.0) / 1000.0;
        Self {
            year,
            month,
            day,
            hour: hour as u32,
            minute: minute as u32,
            second,
        }
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd(self.to_jd() + days)
    }

    /// Check field ranges: month 1-12, day within the month's length
    /// (proleptic Gregorian leap rule), hour < 24, minute < 60, second in [0, 61).
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::FieldOutOfRange("month"));
        }
        if !(1..=days_in_month(self.year, self.month)).contains(&self.day) {
            return Err(TimeError::FieldOutOfRange("day"));
        }
        if self.hour >= 24 {
            return Err(TimeError::FieldOutOfRange("hour"));
        }
        if self.minute >= 60 {
            return Err(TimeError::FieldOutOfRange("minute"));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::FieldOutOfRange("second"));
        }
        Ok(())
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ`, `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        // A leading '-' belongs to the year, not the separator.
        let (sign, date_body) = match date_part.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date_part),
        };
        let date_parts: Vec<&str> = date_body.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DDThh:mm:ssZ, got {s}"
            )));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;

        let (hour, minute, second) = match time_part {
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                if time_parts.len() != 3 {
                    return Err(TimeError::Parse(format!("invalid time of day: {t}")));
                }
                (
                    parse_field(time_parts[0], "hour")?,
                    parse_field(time_parts[1], "minute")?,
                    parse_field(time_parts[2], "second")?,
                )
            }
            None => (0, 0, 0.0),
        };

        let time = Self::new(sign * year, month, day, hour, minute, second);
        time.validate()?;
        Ok(time)
    }
}

fn parse_field<T: FromStr>(raw: &str, name: &str) -> Result<T, TimeError>
where
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| TimeError::Parse(format!("{name} {raw:?}: {e}")))
}

impl Serialize for UtcTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UtcTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        assert_eq!(t.to_string(), "2024-01-15T12:30:45.123Z");
    }

    #[test]
    fn j2000_to_jd() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn from_jd_j2000() {
        let t = UtcTime::from_jd(J2000_JD);
        assert_eq!(t, UtcTime::new(2000, 1, 1, 12, 0, 0.0));
    }

    #[test]
    fn from_jd_midnight_does_not_roll_back() {
        let t = UtcTime::from_jd(2_451_544.5);
        assert_eq!(t, UtcTime::date(2000, 1, 1));
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        let t = UtcTime::new(1999, 12, 31, 18, 0, 0.0).add_days(0.5);
        assert_eq!(t, UtcTime::new(2000, 1, 1, 6, 0, 0.0));
    }

    #[test]
    fn add_negative_days() {
        let t = UtcTime::date(2024, 3, 1).add_days(-1.0);
        assert_eq!(t, UtcTime::date(2024, 2, 29));
    }

    #[test]
    fn parse_full() {
        let t: UtcTime = "2024-06-01T12:30:15Z".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 6, 1, 12, 30, 15.0));
    }

    #[test]
    fn parse_date_only() {
        let t: UtcTime = "1990-01-15".parse().unwrap();
        assert_eq!(t, UtcTime::date(1990, 1, 15));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2024/06/01".parse::<UtcTime>(), Err(TimeError::Parse(_))));
        assert!(matches!("2024-06-01T12:30".parse::<UtcTime>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            "2024-13-01T00:00:00Z".parse::<UtcTime>(),
            Err(TimeError::FieldOutOfRange("month"))
        );
        assert_eq!(
            "2024-01-01T24:00:00Z".parse::<UtcTime>(),
            Err(TimeError::FieldOutOfRange("hour"))
        );
    }

    #[test]
    fn parse_rejects_day_past_month_end() {
        assert_eq!(
            "2024-02-31T00:00:00Z".parse::<UtcTime>(),
            Err(TimeError::FieldOutOfRange("day"))
        );
        assert_eq!(
            "2023-02-29T00:00:00Z".parse::<UtcTime>(),
            Err(TimeError::FieldOutOfRange("day"))
        );
        assert_eq!(
            "1900-02-29T00:00:00Z".parse::<UtcTime>(),
            Err(TimeError::FieldOutOfRange("day"))
        );
        assert_eq!(
            "2024-04-31T12:00:00Z".parse::<UtcTime>(),
            Err(TimeError::FieldOutOfRange("day"))
        );
    }

    #[test]
    fn parse_accepts_leap_days() {
        let t: UtcTime = "2024-02-29T06:30:00Z".parse().unwrap();
        assert_eq!((t.year, t.month, t.day), (2024, 2, 29));
        assert!("2000-02-29T00:00:00Z".parse::<UtcTime>().is_ok());
        assert!("2024-12-31T23:59:59Z".parse::<UtcTime>().is_ok());
        assert!(UtcTime::date(2023, 2, 29).validate().is_err());
    }

    #[test]
    fn serde_as_string() {
        let t = UtcTime::new(2024, 1, 15, 6, 30, 0.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2024-01-15T06:30:00Z\"");
        let back: UtcTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
