//! Shared utility functions for sidereal calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose remainder rounds up to exactly 360 map to 0,
/// so the result is always strictly below 360 for finite input.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Split a longitude in [0, 360) into `(index, offset)` over `count` equal spans.
///
/// The index and offset are derived together: when `floor(lon / span)` rounds
/// up across a boundary, the index steps back so the offset is never negative.
/// The offset is always in `[0, span)`.
pub fn split_span(lon: f64, span: f64, count: u8) -> (u8, f64) {
    let mut idx = ((lon / span).floor().max(0.0) as u8).min(count - 1);
    let mut offset = lon - idx as f64 * span;
    if offset < 0.0 && idx > 0 {
        idx -= 1;
        offset = lon - idx as f64 * span;
    }
    let below_span = span * (1.0 - f64::EPSILON);
    (idx, offset.clamp(0.0, below_span))
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn shortest_arc(a_deg: f64, b_deg: f64) -> f64 {
    let angle = (a_deg - b_deg).abs() % 360.0;
    angle.min(360.0 - angle)
}
