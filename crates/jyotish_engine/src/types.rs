//! Input, configuration and result types for chart assembly.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    AyanamshaModel, AyanamshaSystem, DashaInfo, DivisionalChart, NakshatraInfo, Planet,
    VedicAspect, VedicHouse, VedicPlanetaryPosition, VedicTransit,
};
use jyotish_time::UtcTime;

/// Observer location. Used only to label the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverLocation {
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// IANA zone name, e.g. "Asia/Kolkata".
    #[serde(default)]
    pub timezone: String,
}

/// Chart calculation options.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VedicConfig {
    pub ayanamsha: AyanamshaModel,
    /// Attach the following Mahadashas of the cycle to the dasha snapshot.
    pub include_upcoming_dashas: bool,
}

impl Default for VedicConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaModel::default(),
            include_upcoming_dashas: true,
        }
    }
}

impl VedicConfig {
    pub fn with_system(system: AyanamshaSystem) -> Self {
        Self {
            ayanamsha: AyanamshaModel::from_system(system),
            ..Self::default()
        }
    }
}

/// Five limbs of the day.
///
/// Only `nakshatra` is computed; the other limbs carry fixed names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panchanga {
    pub tithi: &'static str,
    pub vara: &'static str,
    /// The Moon's nakshatra; `None` when the Moon was not supplied.
    pub nakshatra: Option<NakshatraInfo>,
    pub yoga: &'static str,
    pub karana: &'static str,
}

/// Planetary combination. Detection is not performed; lists stay empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicYoga {
    pub name: String,
    pub planets: Vec<Planet>,
    pub description: String,
}

/// Auspicious time window. Not computed; lists stay empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Muhurta {
    pub name: String,
    pub start: UtcTime,
    pub end: UtcTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Charts {
    pub rashi: DivisionalChart,
    pub navamsa: DivisionalChart,
}

/// Complete chart for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicCalculationResult {
    pub timestamp: UtcTime,
    pub location: ObserverLocation,
    /// Ayanamsha applied, degrees.
    pub ayanamsa: f64,
    /// Greenwich mean sidereal time, hours [0, 24).
    pub sidereal_time: f64,
    pub planets: Vec<VedicPlanetaryPosition>,
    pub houses: Vec<VedicHouse>,
    pub aspects: Vec<VedicAspect>,
    pub yogas: Vec<VedicYoga>,
    pub dashas: DashaInfo,
    pub transits: Vec<VedicTransit>,
    pub panchanga: Panchanga,
    pub muhurtas: Vec<Muhurta>,
    pub charts: Charts,
}

impl VedicCalculationResult {
    /// Resolved position of a planet, if it was supplied.
    pub fn planet(&self, planet: Planet) -> Option<&VedicPlanetaryPosition> {
        self.planets.iter().find(|p| p.planet == planet)
    }
}
