//! Panchanga assembly.

use jyotish_base::{Planet, VedicPlanetaryPosition};

use crate::types::Panchanga;

const TITHI_PLACEHOLDER: &str = "Pratipada";
const VARA_PLACEHOLDER: &str = "Ravivara";
const YOGA_PLACEHOLDER: &str = "Vishkambha";
const KARANA_PLACEHOLDER: &str = "Bava";

/// Panchanga with the Moon's nakshatra taken from the resolved positions.
pub fn compute_panchanga(positions: &[VedicPlanetaryPosition]) -> Panchanga {
    Panchanga {
        tithi: TITHI_PLACEHOLDER,
        vara: VARA_PLACEHOLDER,
        nakshatra: positions
            .iter()
            .find(|p| p.planet == Planet::Moon)
            .map(|p| p.nakshatra),
        yoga: YOGA_PLACEHOLDER,
        karana: KARANA_PLACEHOLDER,
    }
}
