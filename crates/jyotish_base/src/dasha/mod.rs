//! Vimshottari dasha (planetary period) snapshot.
//!
//! The Moon's position inside its nakshatra fixes the running Mahadasha
//! and how much of it has elapsed. Sub-periods are taken from the next
//! lords in the cycle rather than by classical nested proportion; see
//! [`vimshottari::calculate_dasha`].

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use types::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, DashaInfo, DashaLevel, DashaPeriod, DurationUnit,
    UpcomingPeriod,
};
pub use vimshottari::{
    UPCOMING_MAHADASHAS, VIMSHOTTARI_ORDER, VIMSHOTTARI_TOTAL_YEARS, calculate_dasha,
    dasha_effects, vimshottari_years,
};
