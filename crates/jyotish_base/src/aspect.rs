//! Pairwise planetary aspects from angular separation.
//!
//! Only three bands are classified: conjunction, opposition and square.
//! Classical graha drishti (per-planet special aspects) is not modelled,
//! so `is_applying` and `nature` always carry their neutral defaults.

use serde::Serialize;

use crate::planet::Planet;
use crate::position::VedicPlanetaryPosition;
use crate::util::shortest_arc;

/// Conjunction band upper limit in degrees.
pub const CONJUNCTION_ORB: f64 = 10.0;
/// Opposition band, inclusive.
pub const OPPOSITION_BAND: (f64, f64) = (170.0, 190.0);
/// Square band, inclusive.
pub const SQUARE_BAND: (f64, f64) = (80.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectType {
    Full,
    Half,
    Quarter,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectNature {
    Benefic,
    Malefic,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicAspect {
    pub aspecting_planet: Planet,
    pub aspected_planet: Planet,
    pub aspect_type: AspectType,
    /// Strength 0-100.
    pub strength: f64,
    pub orb: f64,
    pub is_applying: bool,
    pub nature: AspectNature,
}

/// Classify a separation in [0, 180] into (type, strength, orb).
///
/// The square orb is measured from 180, not 90.
pub fn classify_separation(separation: f64) -> Option<(AspectType, f64, f64)> {
    if separation <= CONJUNCTION_ORB {
        Some((AspectType::Full, 100.0, separation))
    } else if (OPPOSITION_BAND.0..=OPPOSITION_BAND.1).contains(&separation) {
        Some((AspectType::Full, 75.0, (separation - 180.0).abs()))
    } else if (SQUARE_BAND.0..=SQUARE_BAND.1).contains(&separation) {
        Some((AspectType::Half, 50.0, (separation - 180.0).abs()))
    } else {
        None
    }
}

/// Aspect between two longitudes, if any.
pub fn aspect_between(a: Planet, a_lon: f64, b: Planet, b_lon: f64) -> Option<VedicAspect> {
    let (aspect_type, strength, orb) = classify_separation(shortest_arc(a_lon, b_lon))?;
    Some(VedicAspect {
        aspecting_planet: a,
        aspected_planet: b,
        aspect_type,
        strength,
        orb,
        is_applying: false,
        nature: AspectNature::Neutral,
    })
}

/// All aspects among resolved positions, Earth excluded, in pair order (i < j).
pub fn calculate_aspects(positions: &[VedicPlanetaryPosition]) -> Vec<VedicAspect> {
    let bodies: Vec<&VedicPlanetaryPosition> = positions
        .iter()
        .filter(|p| p.planet != Planet::Earth)
        .collect();

    let mut out = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if let Some(asp) = aspect_between(a.planet, a.longitude, b.planet, b.longitude) {
                out.push(asp);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(planet: Planet, lon: f64) -> VedicPlanetaryPosition {
        VedicPlanetaryPosition::from_sidereal(planet, lon, 0.0, 1.0, false)
    }

    #[test]
    fn conjunction() {
        let a = aspect_between(Planet::Sun, 10.0, Planet::Moon, 15.0).unwrap();
        assert_eq!(a.aspect_type, AspectType::Full);
        assert_eq!(a.strength, 100.0);
        assert!((a.orb - 5.0).abs() < 1e-12);
    }

    #[test]
    fn opposition_10_and_185() {
        let a = aspect_between(Planet::Sun, 10.0, Planet::Moon, 185.0).unwrap();
        assert_eq!(a.aspect_type, AspectType::Full);
        assert_eq!(a.strength, 75.0);
        assert!((a.orb - 5.0).abs() < 1e-12);
    }

    #[test]
    fn square_orb_from_180() {
        let a = aspect_between(Planet::Mars, 0.0, Planet::Saturn, 90.0).unwrap();
        assert_eq!(a.aspect_type, AspectType::Half);
        assert_eq!(a.strength, 50.0);
        assert!((a.orb - 90.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_across_zero() {
        let a = aspect_between(Planet::Venus, 355.0, Planet::Mercury, 3.0).unwrap();
        assert_eq!(a.strength, 100.0);
        assert!((a.orb - 8.0).abs() < 1e-9);
    }

    #[test]
    fn band_edges() {
        assert!(classify_separation(10.0).is_some());
        assert!(classify_separation(10.001).is_none());
        assert!(classify_separation(79.999).is_none());
        assert!(classify_separation(80.0).is_some());
        assert!(classify_separation(100.0).is_some());
        assert!(classify_separation(169.9).is_none());
        assert!(classify_separation(170.0).is_some());
        assert!(classify_separation(120.0).is_none());
    }

    #[test]
    fn defaults_neutral() {
        let a = aspect_between(Planet::Jupiter, 0.0, Planet::Rahu, 1.0).unwrap();
        assert!(!a.is_applying);
        assert_eq!(a.nature, AspectNature::Neutral);
    }

    #[test]
    fn earth_excluded_and_pair_order() {
        let positions = [
            pos(Planet::Sun, 0.0),
            pos(Planet::Earth, 180.0),
            pos(Planet::Moon, 5.0),
            pos(Planet::Mars, 180.0),
        ];
        let aspects = calculate_aspects(&positions);
        assert!(aspects.iter().all(|a| a.aspecting_planet != Planet::Earth
            && a.aspected_planet != Planet::Earth));
        let pairs: Vec<_> = aspects
            .iter()
            .map(|a| (a.aspecting_planet, a.aspected_planet))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Planet::Sun, Planet::Moon),
                (Planet::Sun, Planet::Mars),
                (Planet::Moon, Planet::Mars),
            ]
        );
    }

    #[test]
    fn no_aspects_for_single_body() {
        assert!(calculate_aspects(&[pos(Planet::Sun, 12.0)]).is_empty());
    }
}
