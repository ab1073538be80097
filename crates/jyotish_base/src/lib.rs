//! Sidereal reference data and chart building blocks.
//!
//! This crate provides:
//! - Static rashi and nakshatra tables with their resolvers
//! - Ayanamsha presets and tropical → sidereal conversion
//! - Simplified sign-based bhava, pairwise aspects
//! - Vimshottari dasha snapshot, sign-change transits, D1/D9 charts
//!
//! Every function is pure; tables are `static` and read-only.

pub mod amsha;
pub mod aspect;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod error;
pub mod nakshatra;
pub mod planet;
pub mod position;
pub mod rashi;
pub mod transit;
pub mod util;

pub use amsha::{Amsha, ChartPlacement, DivisionalChart, amsha_longitude, divisional_chart};
pub use aspect::{
    AspectNature, AspectType, VedicAspect, aspect_between, calculate_aspects,
    classify_separation,
};
pub use ayanamsha::{AyanamshaModel, AyanamshaSystem, ayanamsa, to_sidereal};
pub use bhava::{VedicHouse, resolve_bhava, sign_houses};
pub use dasha::{
    DashaInfo, DashaLevel, DashaPeriod, DurationUnit, UpcomingPeriod, VIMSHOTTARI_ORDER,
    calculate_dasha,
};
pub use error::VedicError;
pub use nakshatra::{
    Gana, NAKSHATRA_SPAN_27, NAKSHATRA_TABLE, Nadi, Nakshatra, NakshatraInfo,
    NakshatraRecord, nakshatra_index, resolve_nakshatra,
};
pub use planet::{ALL_PLANETS, GRAHAS, Planet, UnknownPlanet};
pub use position::{TropicalPosition, VedicPlanetaryPosition, resolve_position};
pub use rashi::{
    ALL_RASHIS, Element, Quality, RASHI_TABLE, Rashi, RashiRecord, SignNature, degrees_in_rashi,
    rashi_index, resolve_rashi,
};
pub use transit::{TransitIntensity, VedicTransit, detect_transits};
pub use util::normalize_360;
