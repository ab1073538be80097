//! End-to-end chart assembly from tropical positions.

use jyotish_base::{AspectType, Nakshatra, Rashi, VedicPlanetaryPosition};
use jyotish_engine::{
    AyanamshaSystem, ObserverLocation, Planet, TropicalPosition, UtcTime, VedicConfig, VedicError,
    calculate_vedic_astrology, calculate_with_transits,
};

const LAHIRI_J2000: f64 = 23.8583;

fn j2000() -> UtcTime {
    UtcTime::new(2000, 1, 1, 12, 0, 0.0)
}

fn delhi() -> ObserverLocation {
    ObserverLocation {
        latitude: 28.6139,
        longitude: 77.209,
        timezone: "Asia/Kolkata".to_string(),
    }
}

/// Tropical input whose sidereal longitude at J2000 is `sidereal`.
fn at_sidereal(planet: Planet, sidereal: f64) -> TropicalPosition {
    TropicalPosition {
        planet,
        longitude: sidereal + LAHIRI_J2000,
        latitude: 0.5,
        speed: 1.0,
        is_retrograde: false,
    }
}

#[test]
fn moon_in_pushya_drives_dasha_and_panchanga() {
    let input = [at_sidereal(Planet::Sun, 10.0), at_sidereal(Planet::Moon, 101.5)];
    let r = calculate_vedic_astrology(&input, &j2000(), &delhi(), &VedicConfig::default())
        .unwrap();

    assert!((r.ayanamsa - LAHIRI_J2000).abs() < 1e-9);
    let moon = r.planet(Planet::Moon).unwrap();
    assert_eq!(moon.rashi.rashi, Rashi::Karka);
    assert_eq!(moon.nakshatra.nakshatra(), Nakshatra::Pushya);
    assert_eq!(moon.nakshatra.pada, 3);

    assert_eq!(r.dashas.current_mahadasha.planet, Some(Planet::Saturn));
    assert_eq!(r.dashas.upcoming_periods.len(), 8);
    assert_eq!(
        r.panchanga.nakshatra.map(|n| n.nakshatra()),
        Some(Nakshatra::Pushya)
    );
    assert_eq!(r.houses[3].occupants, vec![Planet::Moon]);
    assert_eq!(r.houses[0].occupants, vec![Planet::Sun]);
}

#[test]
fn opposition_detected() {
    let input = [at_sidereal(Planet::Sun, 10.0), at_sidereal(Planet::Moon, 185.0)];
    let r = calculate_vedic_astrology(&input, &j2000(), &delhi(), &VedicConfig::default())
        .unwrap();
    assert_eq!(r.aspects.len(), 1);
    assert_eq!(r.aspects[0].aspect_type, AspectType::Full);
    assert!((r.aspects[0].strength - 75.0).abs() < 1e-12);
}

#[test]
fn earth_has_no_aspects() {
    let input = [at_sidereal(Planet::Earth, 10.0), at_sidereal(Planet::Sun, 190.0)];
    let r = calculate_vedic_astrology(&input, &j2000(), &delhi(), &VedicConfig::default())
        .unwrap();
    assert!(r.aspects.is_empty());
    assert_eq!(r.planets.len(), 2);
}

#[test]
fn non_finite_speed_rejected() {
    let mut bad = at_sidereal(Planet::Mars, 50.0);
    bad.speed = f64::INFINITY;
    let err = calculate_vedic_astrology(&[bad], &j2000(), &delhi(), &VedicConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        VedicError::InvalidInput {
            planet: Some(Planet::Mars),
            field: "speed",
            ..
        }
    ));
}

#[test]
fn other_ayanamsha_shifts_longitudes() {
    let input = [at_sidereal(Planet::Jupiter, 100.0)];
    let lahiri =
        calculate_vedic_astrology(&input, &j2000(), &delhi(), &VedicConfig::default()).unwrap();
    let raman = calculate_vedic_astrology(
        &input,
        &j2000(),
        &delhi(),
        &VedicConfig::with_system(AyanamshaSystem::Raman),
    )
    .unwrap();
    let diff = raman.planets[0].longitude - lahiri.planets[0].longitude;
    assert!((diff - (23.8583 - 22.370)).abs() < 1e-9, "diff = {diff}");
}

#[test]
fn transits_against_previous_snapshot() {
    let previous = [
        VedicPlanetaryPosition::from_sidereal(Planet::Saturn, 329.5, 0.0, 0.1, false),
        VedicPlanetaryPosition::from_sidereal(Planet::Moon, 100.0, 0.0, 13.0, false),
    ];
    let input = [
        at_sidereal(Planet::Saturn, 330.5),
        at_sidereal(Planet::Moon, 101.5),
        at_sidereal(Planet::Sun, 10.0),
    ];
    let r = calculate_with_transits(
        &input,
        &j2000(),
        &delhi(),
        &VedicConfig::default(),
        &previous,
    )
    .unwrap();
    assert_eq!(r.transits.len(), 1);
    assert_eq!(r.transits[0].planet, Planet::Saturn);
    assert_eq!(r.transits[0].to_rashi.rashi, Rashi::Meena);
}

#[test]
fn result_serializes_to_camel_case_json() {
    let input = [at_sidereal(Planet::Moon, 101.5)];
    let r = calculate_vedic_astrology(&input, &j2000(), &delhi(), &VedicConfig::default())
        .unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["timestamp"], "2000-01-01T12:00:00Z");
    assert_eq!(json["location"]["timezone"], "Asia/Kolkata");
    assert!(json["siderealTime"].as_f64().unwrap() < 24.0);
    assert_eq!(json["dashas"]["currentMahadasha"]["planet"], "Saturn");
    assert_eq!(json["dashas"]["currentMahadasha"]["unit"], "Years");
    assert_eq!(json["charts"]["navamsa"]["division"], "D9");
    assert_eq!(json["yogas"].as_array().unwrap().len(), 0);
    assert_eq!(json["panchanga"]["nakshatra"]["name"], "Pushya");
}

#[test]
fn results_are_independent() {
    let input = [at_sidereal(Planet::Moon, 101.5)];
    let cfg = VedicConfig::default();
    let a = calculate_vedic_astrology(&input, &j2000(), &delhi(), &cfg).unwrap();
    let b = calculate_vedic_astrology(&input, &j2000(), &delhi(), &cfg).unwrap();
    assert_eq!(a, b);
}
