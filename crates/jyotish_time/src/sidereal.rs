//! Greenwich Mean Sidereal Time for the chart's sidereal-time label.
//!
//! Computed in turns (fractions of one rotation) so the whole-day part of the
//! elapsed time drops out before it can cost precision. UT1 is taken as UTC.
//!
//! Rotation angle: IERS Conventions 2010, Eq. 5.15. Precession term:
//! Capitaine et al. 2003, Table 2.

use crate::julian::J2000_JD;

/// Rotation phase at J2000.0 noon, turns.
const ROTATION_PHASE_J2000: f64 = 0.779_057_273_264_0;

/// Extra rotation per UT day beyond one full turn.
const ROTATION_EXCESS_PER_DAY: f64 = 0.002_737_811_911_354_48;

/// Arcseconds in one full turn.
const ARCSEC_PER_TURN: f64 = 1_296_000.0;

/// Accumulated precession in right ascension, arcseconds, for `t` Julian
/// centuries from J2000.0.
fn precession_arcsec(t: f64) -> f64 {
    let coeffs = [
        0.014_506,
        4_612.156_534,
        1.391_581_7,
        -0.000_000_44,
        -0.000_029_956,
        -0.000_000_036_8,
    ];
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Greenwich Mean Sidereal Time in hours, in [0, 24).
pub fn gmst_hours(jd: f64) -> f64 {
    let days = jd - J2000_JD;
    let whole = days.floor();
    let rotation = ROTATION_PHASE_J2000 + (days - whole) + ROTATION_EXCESS_PER_DAY * days;
    let precession = precession_arcsec(days / 36_525.0) / ARCSEC_PER_TURN;

    let hours = (rotation + precession).rem_euclid(1.0) * 24.0;
    if hours >= 24.0 { 0.0 } else { hours }
}
