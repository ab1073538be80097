//! Calendar and time helpers for the jyotish workspace.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - `UtcTime`, the calendar instant used throughout the workspace
//! - Greenwich Mean Sidereal Time

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_YEAR, DAYS_PER_TROPICAL_YEAR, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    days_in_month, is_leap_year, jd_to_calendar,
};
pub use sidereal::gmst_hours;
pub use utc_time::UtcTime;
