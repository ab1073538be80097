//! Rashi (zodiac sign) reference table and sign resolution.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal.

use serde::Serialize;

use crate::planet::Planet;
use crate::util::{normalize_360, split_span};

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element (tattva) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Western modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Vedic nature of a sign (chara / sthira / dvisvabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignNature {
    Movable,
    Fixed,
    Dual,
}

/// Static metadata for one rashi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiRecord {
    #[serde(skip)]
    pub rashi: Rashi,
    pub name: &'static str,
    pub western_name: &'static str,
    /// 1-based sign number (1 = Mesha).
    pub number: u8,
    pub element: Element,
    pub quality: Quality,
    pub ruler: Planet,
    /// Planet exalted in this sign, if any.
    pub exaltation: Option<Planet>,
    /// Planet debilitated in this sign, if any.
    pub debilitation: Option<Planet>,
    pub symbol: &'static str,
    /// Limb of the Kalapurusha governed by the sign.
    pub body_part: &'static str,
    pub nature: SignNature,
}

#[allow(clippy::too_many_arguments)]
const fn record(
    rashi: Rashi,
    name: &'static str,
    western_name: &'static str,
    number: u8,
    ruler: Planet,
    exaltation: Option<Planet>,
    debilitation: Option<Planet>,
    symbol: &'static str,
    body_part: &'static str,
) -> RashiRecord {
    // Element and modality follow the fixed 4- and 3-cycles from Mesha.
    let element = match (number - 1) % 4 {
        0 => Element::Fire,
        1 => Element::Earth,
        2 => Element::Air,
        _ => Element::Water,
    };
    let (quality, nature) = match (number - 1) % 3 {
        0 => (Quality::Cardinal, SignNature::Movable),
        1 => (Quality::Fixed, SignNature::Fixed),
        _ => (Quality::Mutable, SignNature::Dual),
    };
    RashiRecord {
        rashi,
        name,
        western_name,
        number,
        element,
        quality,
        ruler,
        exaltation,
        debilitation,
        symbol,
        body_part,
        nature,
    }
}

/// Reference table of all 12 rashis, indexed by [`Rashi::index`].
#[rustfmt::skip]
pub static RASHI_TABLE: [RashiRecord; 12] = [
    record(Rashi::Mesha, "Mesha", "Aries", 1, Planet::Mars,
        Some(Planet::Sun), Some(Planet::Saturn), "Ram", "Head"),
    record(Rashi::Vrishabha, "Vrishabha", "Taurus", 2, Planet::Venus,
        Some(Planet::Moon), None, "Bull", "Face"),
    record(Rashi::Mithuna, "Mithuna", "Gemini", 3, Planet::Mercury,
        None, None, "Twins", "Arms"),
    record(Rashi::Karka, "Karka", "Cancer", 4, Planet::Moon,
        Some(Planet::Jupiter), Some(Planet::Mars), "Crab", "Chest"),
    record(Rashi::Simha, "Simha", "Leo", 5, Planet::Sun,
        None, None, "Lion", "Stomach"),
    record(Rashi::Kanya, "Kanya", "Virgo", 6, Planet::Mercury,
        Some(Planet::Mercury), Some(Planet::Venus), "Maiden", "Waist"),
    record(Rashi::Tula, "Tula", "Libra", 7, Planet::Venus,
        Some(Planet::Saturn), Some(Planet::Sun), "Scales", "Lower abdomen"),
    record(Rashi::Vrischika, "Vrischika", "Scorpio", 8, Planet::Mars,
        None, Some(Planet::Moon), "Scorpion", "Genitals"),
    record(Rashi::Dhanu, "Dhanu", "Sagittarius", 9, Planet::Jupiter,
        None, None, "Archer", "Thighs"),
    record(Rashi::Makara, "Makara", "Capricorn", 10, Planet::Saturn,
        Some(Planet::Mars), Some(Planet::Jupiter), "Sea-goat", "Knees"),
    record(Rashi::Kumbha, "Kumbha", "Aquarius", 11, Planet::Saturn,
        None, None, "Water-bearer", "Calves"),
    record(Rashi::Meena, "Meena", "Pisces", 12, Planet::Jupiter,
        Some(Planet::Venus), Some(Planet::Mercury), "Fishes", "Feet"),
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub fn name(self) -> &'static str {
        RASHI_TABLE[self as usize].name
    }

    /// Western (English) name of the rashi.
    pub fn western_name(self) -> &'static str {
        RASHI_TABLE[self as usize].western_name
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Full reference record.
    pub fn record(self) -> &'static RashiRecord {
        &RASHI_TABLE[self as usize]
    }

    /// Planetary lord of the sign.
    pub fn lord(self) -> Planet {
        RASHI_TABLE[self as usize].ruler
    }

    /// Rashi by 0-based index; `None` if index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// 0-based sign index of a sidereal longitude, clamped to [0, 11].
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    split_span(normalize_360(sidereal_lon_deg), RASHI_SPAN, 12).0
}

/// Resolve the rashi containing a sidereal longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn resolve_rashi(sidereal_lon_deg: f64) -> &'static RashiRecord {
    &RASHI_TABLE[rashi_index(sidereal_lon_deg) as usize]
}

/// Decimal degrees within the containing rashi, in [0, 30).
pub fn degrees_in_rashi(sidereal_lon_deg: f64) -> f64 {
    split_span(normalize_360(sidereal_lon_deg), RASHI_SPAN, 12).1
}
