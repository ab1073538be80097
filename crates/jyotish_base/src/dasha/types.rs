//! Core types for dasha period snapshots.

use serde::Serialize;

use jyotish_time::UtcTime;

use crate::planet::Planet;

/// Year length used for all period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// One twelfth of [`DAYS_PER_YEAR`].
pub const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / 12.0;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Unit in which durations at this level are expressed.
    pub const fn unit(self) -> DurationUnit {
        match self {
            Self::Mahadasha => DurationUnit::Years,
            Self::Antardasha => DurationUnit::Months,
            Self::Pratyantardasha => DurationUnit::Days,
        }
    }
}

/// Unit of `total_duration` / `remaining_duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DurationUnit {
    Years,
    Months,
    Days,
}

impl DurationUnit {
    /// Length of one unit in days.
    pub const fn days(self) -> f64 {
        match self {
            Self::Years => DAYS_PER_YEAR,
            Self::Months => DAYS_PER_MONTH,
            Self::Days => 1.0,
        }
    }
}

/// The running period at one level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    pub level: DashaLevel,
    /// Ruling planet; `None` when the Moon was not supplied.
    pub planet: Option<Planet>,
    pub start_date: UtcTime,
    pub end_date: UtcTime,
    pub total_duration: f64,
    pub remaining_duration: f64,
    pub unit: DurationUnit,
}

/// A future Mahadasha.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPeriod {
    pub level: DashaLevel,
    pub planet: Planet,
    pub start_date: UtcTime,
    pub end_date: UtcTime,
    /// Length in years.
    pub duration: f64,
    pub effects: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaInfo {
    pub current_mahadasha: DashaPeriod,
    pub current_antardasha: DashaPeriod,
    pub current_pratyantardasha: DashaPeriod,
    pub upcoming_periods: Vec<UpcomingPeriod>,
}
