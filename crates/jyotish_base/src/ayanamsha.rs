//! Ayanamsha computation and tropical → sidereal conversion.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and a sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsha increases over time.
//!
//! The model is linear: a reference value at an epoch plus a constant
//! precession rate times the tropical years elapsed since that epoch.
//! Each preset system differs only in its reference value.

use std::str::FromStr;

use serde::Deserialize;

use jyotish_time::{DAYS_PER_TROPICAL_YEAR, J2000_JD, UtcTime};

use crate::util::normalize_360;

/// Mean general precession in longitude, arcseconds per tropical year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.29;

/// Lahiri reference value at the 2000-01-01 epoch, in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.8583;

/// Preset sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    Lahiri,
    /// Krishnamurti Paddhati: minimal offset from Lahiri.
    #[serde(alias = "krishnamurti")]
    Kp,
    /// B.V. Raman: zero ayanamsha year ~397 CE.
    Raman,
    /// Fagan-Bradley: primary Western sidereal system.
    #[serde(alias = "fagan-bradley")]
    FaganBradley,
    /// Sri Yukteshwar: from "The Holy Science".
    Yukteshwar,
}

/// All preset systems in enum order.
const ALL_SYSTEMS: [AyanamshaSystem; 5] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Kp,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => LAHIRI_J2000_DEG,
            Self::Kp => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Kp => "KP",
            Self::Raman => "Raman",
            Self::FaganBradley => "Fagan-Bradley",
            Self::Yukteshwar => "Yukteshwar",
        }
    }

    /// All defined preset systems.
    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

impl FromStr for AyanamshaSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "kp" | "krishnamurti" => Ok(Self::Kp),
            "raman" => Ok(Self::Raman),
            "faganbradley" | "fagan-bradley" => Ok(Self::FaganBradley),
            "yukteshwar" => Ok(Self::Yukteshwar),
            other => Err(format!("unknown ayanamsha system: {other}")),
        }
    }
}

/// Linear ayanamsha model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AyanamshaModel {
    /// Ayanamsha at `epoch_jd`, degrees.
    pub reference_deg: f64,
    /// Julian Date of the reference epoch.
    pub epoch_jd: f64,
    /// Precession rate, arcseconds per tropical year.
    pub rate_arcsec_per_year: f64,
}

impl Default for AyanamshaModel {
    fn default() -> Self {
        Self::from_system(AyanamshaSystem::Lahiri)
    }
}

impl AyanamshaModel {
    /// Model for a preset system, anchored at J2000.0.
    pub const fn from_system(system: AyanamshaSystem) -> Self {
        Self {
            reference_deg: system.reference_j2000_deg(),
            epoch_jd: J2000_JD,
            rate_arcsec_per_year: PRECESSION_ARCSEC_PER_YEAR,
        }
    }

    /// Ayanamsha in degrees at a Julian Date.
    pub fn ayanamsa_at_jd(&self, jd: f64) -> f64 {
        let years = (jd - self.epoch_jd) / DAYS_PER_TROPICAL_YEAR;
        self.reference_deg + self.rate_arcsec_per_year / 3600.0 * years
    }

    /// Ayanamsha in degrees at a calendar instant.
    pub fn ayanamsa(&self, date: &UtcTime) -> f64 {
        self.ayanamsa_at_jd(date.to_jd())
    }

    /// Sidereal longitude in [0, 360) for a tropical longitude at `date`.
    pub fn to_sidereal(&self, tropical_lon_deg: f64, date: &UtcTime) -> f64 {
        normalize_360(tropical_lon_deg - self.ayanamsa(date))
    }

    /// Tropical longitude in [0, 360) for a sidereal longitude at `date`.
    pub fn from_sidereal(&self, sidereal_lon_deg: f64, date: &UtcTime) -> f64 {
        normalize_360(sidereal_lon_deg + self.ayanamsa(date))
    }
}

/// Lahiri ayanamsha in degrees at `date`.
pub fn ayanamsa(date: &UtcTime) -> f64 {
    AyanamshaModel::default().ayanamsa(date)
}

/// Tropical → sidereal (Lahiri), normalized into [0, 360).
pub fn to_sidereal(tropical_lon_deg: f64, date: &UtcTime) -> f64 {
    AyanamshaModel::default().to_sidereal(tropical_lon_deg, date)
}
