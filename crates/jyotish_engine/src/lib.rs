//! Sidereal chart assembly.
//!
//! [`calculate_vedic_astrology`] takes tropical positions from an ephemeris
//! provider and returns a [`VedicCalculationResult`]: placements, houses,
//! aspects, dasha, panchanga and the D1/D9 charts.
//! [`calculate_with_transits`] also compares against an earlier snapshot.

pub mod calculation;
pub mod panchanga;
pub mod types;

pub use calculation::{calculate_vedic_astrology, calculate_with_transits, resolve_positions};
pub use panchanga::compute_panchanga;
pub use types::{
    Charts, Muhurta, ObserverLocation, Panchanga, VedicCalculationResult, VedicConfig, VedicYoga,
};

pub use jyotish_base::{AyanamshaModel, AyanamshaSystem, Planet, TropicalPosition, VedicError};
pub use jyotish_time::UtcTime;
