//! Divisional charts: D1 (rashi) and D9 (navamsa).
//!
//! D9 divides each sign into nine parts of 3°20′. The first part maps to a
//! starting sign fixed by the natal sign's element and the rest follow in
//! zodiac order.

use serde::Serialize;

use crate::planet::Planet;
use crate::position::VedicPlanetaryPosition;
use crate::rashi::{Element, RASHI_SPAN, RASHI_TABLE, RashiRecord, rashi_index};
use crate::util::{normalize_360, split_span};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Amsha {
    D1,
    D9,
}

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D9 => 9,
        }
    }
}

/// Starting sign (0-based) of the first navamsa for each element.
const fn navamsa_start(element: Element) -> u8 {
    match element {
        Element::Fire => 0,  // Mesha
        Element::Earth => 9, // Makara
        Element::Air => 6,   // Tula
        Element::Water => 3, // Karka
    }
}

/// Longitude of a sidereal position in the given divisional chart.
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if amsha == Amsha::D1 {
        return lon;
    }

    let (rashi_idx, pos_in_rashi) = split_span(lon, RASHI_SPAN, 12);
    let divisions = amsha.divisions();
    let deg_per_div = RASHI_SPAN / divisions as f64;
    let (div_idx, pos_in_div) = split_span(pos_in_rashi, deg_per_div, divisions);

    let start = navamsa_start(RASHI_TABLE[rashi_idx as usize].element);
    let target = (start + div_idx) % 12;

    normalize_360(target as f64 * RASHI_SPAN + pos_in_div / deg_per_div * RASHI_SPAN)
}

/// One planet placed in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPlacement {
    pub planet: Planet,
    pub rashi: &'static RashiRecord,
    /// Longitude in the divisional chart.
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionalChart {
    pub division: Amsha,
    pub placements: Vec<ChartPlacement>,
}

/// Place every resolved position in a divisional chart, in input order.
pub fn divisional_chart(positions: &[VedicPlanetaryPosition], amsha: Amsha) -> DivisionalChart {
    let placements = positions
        .iter()
        .map(|p| {
            let longitude = amsha_longitude(p.longitude, amsha);
            ChartPlacement {
                planet: p.planet,
                rashi: &RASHI_TABLE[rashi_index(longitude) as usize],
                longitude,
            }
        })
        .collect();
    DivisionalChart {
        division: amsha,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::Rashi;

    #[test]
    fn d1_is_identity() {
        assert!((amsha_longitude(123.4, Amsha::D1) - 123.4).abs() < 1e-12);
    }

    #[test]
    fn d9_fire_sign_starts_at_mesha() {
        // 0° Mesha → 0° Mesha navamsa
        assert!(amsha_longitude(0.0, Amsha::D9).abs() < 1e-9);
        // 5° Simha: second navamsa of a fire sign → Vrishabha, 15° in
        let lon = amsha_longitude(125.0, Amsha::D9);
        assert_eq!(rashi_index(lon), Rashi::Vrishabha.index());
        assert!((lon - 45.0).abs() < 1e-9, "lon = {lon}");
    }

    #[test]
    fn d9_start_signs_by_element() {
        assert_eq!(rashi_index(amsha_longitude(30.1, Amsha::D9)), Rashi::Makara.index());
        assert_eq!(rashi_index(amsha_longitude(60.1, Amsha::D9)), Rashi::Tula.index());
        assert_eq!(rashi_index(amsha_longitude(90.1, Amsha::D9)), Rashi::Karka.index());
    }

    #[test]
    fn d9_last_navamsa_of_meena() {
        // Water sign: Karka + 8 → Meena
        let lon = amsha_longitude(359.9, Amsha::D9);
        assert_eq!(rashi_index(lon), Rashi::Meena.index());
    }

    #[test]
    fn vargottama_first_navamsa_of_mesha() {
        assert_eq!(rashi_index(amsha_longitude(2.0, Amsha::D9)), 0);
    }

    #[test]
    fn chart_preserves_order() {
        let positions = [
            VedicPlanetaryPosition::from_sidereal(Planet::Sun, 125.0, 0.0, 1.0, false),
            VedicPlanetaryPosition::from_sidereal(Planet::Moon, 2.0, 0.0, 13.0, false),
        ];
        let chart = divisional_chart(&positions, Amsha::D9);
        assert_eq!(chart.division, Amsha::D9);
        assert_eq!(chart.placements[0].planet, Planet::Sun);
        assert_eq!(chart.placements[0].rashi.rashi, Rashi::Vrishabha);
        assert_eq!(chart.placements[1].rashi.rashi, Rashi::Mesha);
    }
}
