//! Moon position within its nakshatra.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::{normalize_360, split_span};

/// Returns `(nakshatra_index, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based (0=Ashwini..26=Revati)
/// - `elapsed_fraction`: fraction of the nakshatra already traversed, [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> (u8, f64) {
    let (nak_idx, position_in_nak) =
        split_span(normalize_360(moon_sidereal_lon), NAKSHATRA_SPAN_27, 27);
    (nak_idx, (position_in_nak / NAKSHATRA_SPAN_27).min(1.0 - f64::EPSILON))
}
