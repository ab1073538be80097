//! Simplified sign-based houses.
//!
//! No ascendant is computed: house n is the n-th sign from Mesha. Any
//! ascendant-based house system must live in its own resolver.

use serde::Serialize;

use crate::planet::Planet;
use crate::position::VedicPlanetaryPosition;
use crate::rashi::{ALL_RASHIS, RASHI_SPAN, RashiRecord, rashi_index};

/// House number 1-12 for a sidereal longitude.
///
/// Computed as `((floor(lon / 30) + 1) mod 12)`, with 0 mapped to 12.
pub fn resolve_bhava(sidereal_lon_deg: f64) -> u8 {
    let sign = rashi_index(sidereal_lon_deg) as u32;
    match (sign + 1) % 12 {
        0 => 12,
        n => n as u8,
    }
}

/// One sign-based house.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicHouse {
    /// House number 1-12.
    pub number: u8,
    pub rashi: &'static RashiRecord,
    /// Start of the house, (number - 1) × 30 degrees.
    pub cusp_longitude: f64,
    pub lord: Planet,
    /// Planets whose bhava equals this house, in input order.
    pub occupants: Vec<Planet>,
}

/// Build all 12 houses and assign occupants from resolved positions.
pub fn sign_houses(positions: &[VedicPlanetaryPosition]) -> Vec<VedicHouse> {
    ALL_RASHIS
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let number = i as u8 + 1;
            VedicHouse {
                number,
                rashi: r.record(),
                cusp_longitude: i as f64 * RASHI_SPAN,
                lord: r.lord(),
                occupants: positions
                    .iter()
                    .filter(|p| p.bhava == number)
                    .map(|p| p.planet)
                    .collect(),
            }
        })
        .collect()
}
