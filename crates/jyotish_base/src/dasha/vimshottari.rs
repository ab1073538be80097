//! Vimshottari sequence data and the three-level period snapshot.

use jyotish_time::UtcTime;

use crate::planet::Planet;

use super::balance::nakshatra_birth_balance;
use super::types::{DashaInfo, DashaLevel, DashaPeriod, DurationUnit, UpcomingPeriod};

/// Vimshottari lords in cycle order, starting from Ashwini's lord.
pub const VIMSHOTTARI_ORDER: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

/// Mahadasha length in years, parallel to [`VIMSHOTTARI_ORDER`].
const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Mahadashas listed after the current one; with it they complete the cycle.
pub const UPCOMING_MAHADASHAS: usize = 8;

/// Mahadasha allocation in years for a cycle position.
pub fn vimshottari_years(cycle_idx: usize) -> f64 {
    VIMSHOTTARI_YEARS[cycle_idx % 9]
}

/// Broad themes of a lord's Mahadasha.
pub fn dasha_effects(planet: Planet) -> &'static [&'static str] {
    match planet {
        Planet::Ketu => &["Detachment", "Spiritual insight", "Sudden changes"],
        Planet::Venus => &["Relationships", "Comforts and luxury", "Artistic pursuits"],
        Planet::Sun => &["Authority", "Recognition", "Health of the father"],
        Planet::Moon => &["Emotional sensitivity", "Home and family", "Public contact"],
        Planet::Mars => &["Energy and initiative", "Property matters", "Conflicts"],
        Planet::Rahu => &["Ambition", "Foreign connections", "Unconventional gains"],
        Planet::Jupiter => &["Wisdom and learning", "Children", "Prosperity"],
        Planet::Saturn => &["Discipline", "Hard work", "Delays and endurance"],
        Planet::Mercury => &["Communication", "Commerce", "Intellectual growth"],
        _ => &[],
    }
}

fn period(
    level: DashaLevel,
    planet: Planet,
    total: f64,
    elapsed: f64,
    date: &UtcTime,
) -> DashaPeriod {
    let unit = level.unit();
    DashaPeriod {
        level,
        planet: Some(planet),
        start_date: *date,
        end_date: date.add_days(total * unit.days()),
        total_duration: total,
        remaining_duration: total * (1.0 - elapsed),
        unit,
    }
}

fn empty_period(level: DashaLevel, date: &UtcTime) -> DashaPeriod {
    DashaPeriod {
        level,
        planet: None,
        start_date: *date,
        end_date: *date,
        total_duration: 0.0,
        remaining_duration: 0.0,
        unit: level.unit(),
    }
}

fn upcoming(first_idx: usize, start: UtcTime) -> Vec<UpcomingPeriod> {
    let mut out = Vec::with_capacity(UPCOMING_MAHADASHAS);
    let mut cursor = start;
    for k in 0..UPCOMING_MAHADASHAS {
        let idx = (first_idx + k) % 9;
        let years = vimshottari_years(idx);
        let end = cursor.add_days(years * DurationUnit::Years.days());
        let planet = VIMSHOTTARI_ORDER[idx];
        out.push(UpcomingPeriod {
            level: DashaLevel::Mahadasha,
            planet,
            start_date: cursor,
            end_date: end,
            duration: years,
            effects: dasha_effects(planet).to_vec(),
        });
        cursor = end;
    }
    out
}

/// Dasha snapshot for the Moon's sidereal longitude at `date`.
///
/// - Mahadasha lord is `order[idx % 9]`, total = its allocation in years.
/// - Antardasha lord is the next lord in the cycle, total = allocation / 9 months.
/// - Pratyantardasha lord is the one after, total = allocation / 120 days.
///
/// The sub-period lords are the next planets in the cycle, not the classical
/// nested subdivision of the Mahadasha. All three levels start at `date`
/// and scale their remaining duration by the same elapsed fraction.
///
/// With `moon_sidereal_lon = None` every level has no planet, zero
/// durations, and start and end both at `date`.
pub fn calculate_dasha(
    moon_sidereal_lon: Option<f64>,
    date: &UtcTime,
    include_upcoming: bool,
) -> DashaInfo {
    let Some(moon) = moon_sidereal_lon else {
        return DashaInfo {
            current_mahadasha: empty_period(DashaLevel::Mahadasha, date),
            current_antardasha: empty_period(DashaLevel::Antardasha, date),
            current_pratyantardasha: empty_period(DashaLevel::Pratyantardasha, date),
            upcoming_periods: Vec::new(),
        };
    };

    let (nak_idx, elapsed) = nakshatra_birth_balance(moon);
    let idx = nak_idx as usize;
    let maha_idx = idx % 9;
    let antar_idx = (idx + 1) % 9;
    let pratyantar_idx = (idx + 2) % 9;

    let maha = period(
        DashaLevel::Mahadasha,
        VIMSHOTTARI_ORDER[maha_idx],
        vimshottari_years(maha_idx),
        elapsed,
        date,
    );
    let antar = period(
        DashaLevel::Antardasha,
        VIMSHOTTARI_ORDER[antar_idx],
        vimshottari_years(antar_idx) / 9.0,
        elapsed,
        date,
    );
    let pratyantar = period(
        DashaLevel::Pratyantardasha,
        VIMSHOTTARI_ORDER[pratyantar_idx],
        vimshottari_years(pratyantar_idx) / 120.0,
        elapsed,
        date,
    );

    let upcoming_periods = if include_upcoming {
        upcoming(maha_idx + 1, maha.end_date)
    } else {
        Vec::new()
    };

    DashaInfo {
        current_mahadasha: maha,
        current_antardasha: antar,
        current_pratyantardasha: pratyantar,
        upcoming_periods,
    }
}
