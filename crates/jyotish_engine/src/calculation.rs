//! Chart orchestration: validate, resolve, then derive every section.

use tracing::debug;

use jyotish_base::error::ensure_finite;
use jyotish_base::{
    Amsha, Planet, TropicalPosition, VedicError, VedicPlanetaryPosition, calculate_aspects,
    calculate_dasha, detect_transits, divisional_chart, resolve_position, sign_houses,
};
use jyotish_time::{UtcTime, gmst_hours};

use crate::panchanga::compute_panchanga;
use crate::types::{Charts, ObserverLocation, VedicCalculationResult, VedicConfig};

fn validate_location(location: &ObserverLocation) -> Result<(), VedicError> {
    ensure_finite(None, "observer latitude", location.latitude)?;
    ensure_finite(None, "observer longitude", location.longitude)?;
    Ok(())
}

/// Convert and resolve every tropical position, in input order.
///
/// Fails on the first planet with a non-finite numeric field.
pub fn resolve_positions(
    positions: &[TropicalPosition],
    time: &UtcTime,
    config: &VedicConfig,
) -> Result<Vec<VedicPlanetaryPosition>, VedicError> {
    positions
        .iter()
        .map(|p| resolve_position(p, time, &config.ayanamsha))
        .collect()
}

/// Build the full sidereal chart for `time`.
pub fn calculate_vedic_astrology(
    positions: &[TropicalPosition],
    time: &UtcTime,
    location: &ObserverLocation,
    config: &VedicConfig,
) -> Result<VedicCalculationResult, VedicError> {
    time.validate()?;
    validate_location(location)?;

    let ayanamsa = config.ayanamsha.ayanamsa(time);
    let planets = resolve_positions(positions, time, config)?;
    debug!(
        %time,
        ayanamsa,
        planets = planets.len(),
        "resolved sidereal positions"
    );

    let aspects = calculate_aspects(&planets);
    let moon = planets
        .iter()
        .find(|p| p.planet == Planet::Moon)
        .map(|p| p.longitude);
    if moon.is_none() {
        debug!("moon absent, dasha falls back to empty periods");
    }
    let dashas = calculate_dasha(moon, time, config.include_upcoming_dashas);

    let charts = Charts {
        rashi: divisional_chart(&planets, Amsha::D1),
        navamsa: divisional_chart(&planets, Amsha::D9),
    };
    debug!(aspects = aspects.len(), "chart assembled");

    Ok(VedicCalculationResult {
        timestamp: *time,
        location: location.clone(),
        ayanamsa,
        sidereal_time: gmst_hours(time.to_jd()),
        houses: sign_houses(&planets),
        panchanga: compute_panchanga(&planets),
        aspects,
        yogas: Vec::new(),
        dashas,
        transits: Vec::new(),
        muhurtas: Vec::new(),
        charts,
        planets,
    })
}

/// As [`calculate_vedic_astrology`], plus sign changes against `previous`.
pub fn calculate_with_transits(
    positions: &[TropicalPosition],
    time: &UtcTime,
    location: &ObserverLocation,
    config: &VedicConfig,
    previous: &[VedicPlanetaryPosition],
) -> Result<VedicCalculationResult, VedicError> {
    let mut result = calculate_vedic_astrology(positions, time, location, config)?;
    result.transits = detect_transits(&result.planets, previous, time);
    debug!(transits = result.transits.len(), "transits detected");
    Ok(result)
}
