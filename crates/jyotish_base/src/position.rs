//! Input positions from the ephemeris provider and their resolved sidereal form.

use serde::{Deserialize, Serialize};

use jyotish_time::UtcTime;

use crate::ayanamsha::AyanamshaModel;
use crate::bhava::resolve_bhava;
use crate::error::{VedicError, ensure_finite};
use crate::nakshatra::{NakshatraInfo, resolve_nakshatra};
use crate::planet::Planet;
use crate::rashi::{RashiRecord, resolve_rashi};

/// One planet's tropical ecliptic state at the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TropicalPosition {
    pub planet: Planet,
    /// Tropical ecliptic longitude in degrees.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Daily motion in degrees/day.
    pub speed: f64,
    #[serde(default)]
    pub is_retrograde: bool,
}

impl TropicalPosition {
    /// Fail on the first non-finite numeric field.
    pub fn validate(&self) -> Result<(), VedicError> {
        let p = Some(self.planet);
        ensure_finite(p, "longitude", self.longitude)?;
        ensure_finite(p, "latitude", self.latitude)?;
        ensure_finite(p, "speed", self.speed)?;
        Ok(())
    }
}

/// A planet placed in the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicPlanetaryPosition {
    pub planet: Planet,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub latitude: f64,
    pub rashi: &'static RashiRecord,
    pub nakshatra: NakshatraInfo,
    /// House number 1-12.
    pub bhava: u8,
    pub is_retrograde: bool,
    pub speed: f64,
}

impl VedicPlanetaryPosition {
    /// Place a body already expressed in sidereal longitude.
    pub fn from_sidereal(
        planet: Planet,
        sidereal_lon: f64,
        latitude: f64,
        speed: f64,
        is_retrograde: bool,
    ) -> Self {
        let rashi = resolve_rashi(sidereal_lon);
        let nakshatra = resolve_nakshatra(sidereal_lon);
        Self {
            planet,
            longitude: crate::util::normalize_360(sidereal_lon),
            latitude,
            rashi,
            nakshatra,
            bhava: resolve_bhava(sidereal_lon),
            is_retrograde,
            speed,
        }
    }
}

/// Convert a tropical position and resolve its rashi, nakshatra and bhava.
pub fn resolve_position(
    pos: &TropicalPosition,
    date: &UtcTime,
    model: &AyanamshaModel,
) -> Result<VedicPlanetaryPosition, VedicError> {
    pos.validate()?;
    let sidereal = model.to_sidereal(pos.longitude, date);
    Ok(VedicPlanetaryPosition::from_sidereal(
        pos.planet,
        sidereal,
        pos.latitude,
        pos.speed,
        pos.is_retrograde,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::Nakshatra;
    use crate::rashi::Rashi;

    #[test]
    fn moon_at_101_5_sidereal() {
        let p = VedicPlanetaryPosition::from_sidereal(Planet::Moon, 101.5, 0.0, 13.2, false);
        assert_eq!(p.rashi.rashi, Rashi::Karka);
        assert_eq!(p.nakshatra.nakshatra(), Nakshatra::Pushya);
        assert_eq!(p.nakshatra.pada, 3);
        assert_eq!(p.bhava, 4);
    }

    #[test]
    fn resolve_applies_ayanamsha() {
        let date = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        let pos = TropicalPosition {
            planet: Planet::Sun,
            longitude: 280.0,
            latitude: 0.0,
            speed: 1.019,
            is_retrograde: false,
        };
        let v = resolve_position(&pos, &date, &AyanamshaModel::default()).unwrap();
        assert!((v.longitude - (280.0 - 23.8583)).abs() < 1e-9);
        assert_eq!(v.rashi.rashi, Rashi::Dhanu);
    }

    #[test]
    fn non_finite_rejected() {
        let pos = TropicalPosition {
            planet: Planet::Venus,
            longitude: 10.0,
            latitude: f64::NAN,
            speed: 1.0,
            is_retrograde: false,
        };
        let err = resolve_position(&pos, &UtcTime::date(2020, 1, 1), &AyanamshaModel::default())
            .unwrap_err();
        assert!(matches!(
            err,
            VedicError::InvalidInput {
                planet: Some(Planet::Venus),
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn deserialize_camel_case() {
        let json = r#"{"planet":"Saturn","longitude":330.5,"latitude":-1.2,"speed":-0.03,"isRetrograde":true}"#;
        let pos: TropicalPosition = serde_json::from_str(json).unwrap();
        assert_eq!(pos.planet, Planet::Saturn);
        assert!(pos.is_retrograde);
    }
}
