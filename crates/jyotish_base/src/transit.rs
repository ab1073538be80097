//! Sign-change (transit) detection between two position snapshots.

use serde::Serialize;
use tracing::trace;

use jyotish_time::UtcTime;

use crate::nakshatra::NakshatraInfo;
use crate::planet::Planet;
use crate::position::VedicPlanetaryPosition;
use crate::rashi::{Element, RashiRecord, rashi_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransitIntensity {
    Major,
    Moderate,
    Minor,
}

impl TransitIntensity {
    pub const fn for_planet(planet: Planet) -> Self {
        match planet {
            Planet::Jupiter
            | Planet::Saturn
            | Planet::Rahu
            | Planet::Ketu
            | Planet::Uranus
            | Planet::Neptune
            | Planet::Pluto => Self::Major,
            Planet::Sun | Planet::Mars | Planet::Mercury | Planet::Venus => Self::Moderate,
            Planet::Moon | Planet::Earth => Self::Minor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicTransit {
    pub planet: Planet,
    pub from_rashi: &'static RashiRecord,
    pub to_rashi: &'static RashiRecord,
    pub from_nakshatra: NakshatraInfo,
    pub to_nakshatra: NakshatraInfo,
    pub transit_date: UtcTime,
    pub significance: Vec<String>,
    pub effects: Vec<&'static str>,
    /// Mean time the planet stays in the new sign.
    pub duration_days: f64,
    pub intensity: TransitIntensity,
}

/// Themes of entering a sign of the given element.
pub fn element_effects(element: Element) -> &'static [&'static str] {
    match element {
        Element::Fire => &["Heightened energy", "Leadership and initiative"],
        Element::Earth => &["Practical focus", "Material stability"],
        Element::Air => &["Communication and ideas", "Social connections"],
        Element::Water => &["Emotional depth", "Intuition and sensitivity"],
    }
}

/// Compare `current` against `previous` and emit one transit per planet whose
/// sign index changed. Planets missing from `previous` are skipped.
pub fn detect_transits(
    current: &[VedicPlanetaryPosition],
    previous: &[VedicPlanetaryPosition],
    date: &UtcTime,
) -> Vec<VedicTransit> {
    let mut out = Vec::new();
    for cur in current {
        let Some(prev) = previous.iter().find(|p| p.planet == cur.planet) else {
            trace!(planet = %cur.planet, "no previous position");
            continue;
        };
        if rashi_index(prev.longitude) == rashi_index(cur.longitude) {
            continue;
        }
        trace!(
            planet = %cur.planet,
            from = prev.rashi.name,
            to = cur.rashi.name,
            "sign change"
        );
        out.push(VedicTransit {
            planet: cur.planet,
            from_rashi: prev.rashi,
            to_rashi: cur.rashi,
            from_nakshatra: prev.nakshatra,
            to_nakshatra: cur.nakshatra,
            transit_date: *date,
            significance: vec![format!(
                "{} moves from {} to {}",
                cur.planet, prev.rashi.name, cur.rashi.name
            )],
            effects: element_effects(cur.rashi.element).to_vec(),
            duration_days: cur.planet.mean_sign_residence_days(),
            intensity: TransitIntensity::for_planet(cur.planet),
        });
    }
    out
}
