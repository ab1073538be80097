//! Command-level tests against the JSON fixtures in `tests/data`.

use std::path::{Path, PathBuf};

use jyotish_base::{AyanamshaSystem, Nakshatra, Planet, Rashi};
use jyotish_cli::{
    CliError, ayanamsa_line, load_input, load_snapshot, nakshatra_line, rashi_line, run_chart,
};
use jyotish_time::UtcTime;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn chart_from_fixture() {
    let input = load_input(&data("chart_input.json")).unwrap();
    assert_eq!(input.positions.len(), 4);
    let r = run_chart(&input, None, None).unwrap();

    let moon = r.planet(Planet::Moon).unwrap();
    assert_eq!(moon.rashi.rashi, Rashi::Karka);
    assert_eq!(moon.nakshatra.nakshatra(), Nakshatra::Pushya);
    assert!(r.planet(Planet::Saturn).unwrap().is_retrograde);
    assert!(r.transits.is_empty());
}

#[test]
fn chart_with_previous_snapshot() {
    let input = load_input(&data("chart_input.json")).unwrap();
    let prev = load_snapshot(&data("previous.json")).unwrap();
    let r = run_chart(&input, Some(&prev), None).unwrap();
    // Sun: ~225.6 (Vrischika) → ~256.5 (Dhanu); Saturn stays in Mesha.
    assert_eq!(r.transits.len(), 1);
    assert_eq!(r.transits[0].planet, Planet::Sun);
    assert_eq!(r.transits[0].to_rashi.rashi, Rashi::Dhanu);
}

#[test]
fn ayanamsha_flag_overrides_config() {
    let input = load_input(&data("chart_input.json")).unwrap();
    let r = run_chart(&input, None, Some(AyanamshaSystem::FaganBradley)).unwrap();
    assert!((r.ayanamsa - 24.736).abs() < 1e-9);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_input(&data("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn malformed_json_is_json_error() {
    let path = std::env::temp_dir().join(format!("jyotish_bad_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"date": "2000-01-01", "positions": [{"planet": "Vulcan"}]}"#)
        .unwrap();
    let err = load_snapshot(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, CliError::Json { .. }));
}

#[test]
fn non_finite_input_is_vedic_error() {
    let mut input = load_input(&data("chart_input.json")).unwrap();
    input.location.longitude = f64::INFINITY;
    let err = run_chart(&input, None, None).unwrap_err();
    assert!(matches!(err, CliError::Vedic(_)));
}

#[test]
fn rashi_and_nakshatra_lines() {
    assert_eq!(
        rashi_line(45.5),
        "Vrishabha (Taurus) - 15.5000 deg in rashi, lord Venus"
    );
    assert!(nakshatra_line(101.5).starts_with("Pushya (number 8) - Pada 3"));
}

#[test]
fn ayanamsa_at_j2000() {
    let line = ayanamsa_line(&UtcTime::new(2000, 1, 1, 12, 0, 0.0), AyanamshaSystem::Lahiri);
    assert_eq!(line, "Lahiri ayanamsha at 2000-01-01T12:00:00Z: 23.858300 deg");
}
