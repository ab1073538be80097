//! Nakshatra (lunar mansion) reference table and resolution.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of 3 deg 20'.
//!
//! Rulers follow the Vimshottari order (Ketu, Venus, Sun, Moon, Mars, Rahu,
//! Jupiter, Saturn, Mercury), repeated three times from Ashwini.

use serde::Serialize;

use crate::planet::Planet;
use crate::util::{normalize_360, split_span};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Ayurvedic channel of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    /// Vata.
    Adi,
    /// Pitta.
    Madhya,
    /// Kapha.
    Antya,
}

/// Static metadata for one nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraRecord {
    #[serde(skip)]
    pub nakshatra: Nakshatra,
    pub name: &'static str,
    /// 1-based number (1 = Ashwini).
    pub number: u8,
    pub ruler: Planet,
    pub deity: &'static str,
    pub symbol: &'static str,
    /// Activity class (Kshipra, Dhruva, Ugra, ...).
    pub nature: &'static str,
    pub gana: Gana,
    pub yoni: &'static str,
    pub tatva: &'static str,
    pub varna: &'static str,
    pub gotra: &'static str,
    pub nadi: Nadi,
    pub characteristics: &'static [&'static str],
}

/// Sages of the seven gotras, assigned cyclically from Ashwini.
const GOTRAS: [&str; 7] = [
    "Marichi",
    "Vashishtha",
    "Angiras",
    "Atri",
    "Pulastya",
    "Pulaha",
    "Kratu",
];

#[allow(clippy::too_many_arguments)]
const fn record(
    nakshatra: Nakshatra,
    name: &'static str,
    ruler: Planet,
    deity: &'static str,
    symbol: &'static str,
    nature: &'static str,
    gana: Gana,
    yoni: &'static str,
    varna: &'static str,
    nadi: Nadi,
    characteristics: &'static [&'static str],
) -> NakshatraRecord {
    let idx = nakshatra as usize;
    // Five tattvas in blocks: 5 earth, 6 water, 6 fire, 5 air, 5 ether.
    let tatva = match idx {
        0..=4 => "Prithvi",
        5..=10 => "Jala",
        11..=16 => "Agni",
        17..=21 => "Vayu",
        _ => "Akasha",
    };
    NakshatraRecord {
        nakshatra,
        name,
        number: idx as u8 + 1,
        ruler,
        deity,
        symbol,
        nature,
        gana,
        yoni,
        tatva,
        varna,
        gotra: GOTRAS[idx % 7],
        nadi,
        characteristics,
    }
}

use Gana::{Deva, Manushya, Rakshasa};
use Nadi::{Adi, Antya, Madhya};

/// Reference table of all 27 nakshatras, indexed by [`Nakshatra::index`].
#[rustfmt::skip]
pub static NAKSHATRA_TABLE: [NakshatraRecord; 27] = [
    record(Nakshatra::Ashwini, "Ashwini", Planet::Ketu, "Ashwini Kumaras", "Horse's head",
        "Kshipra", Deva, "Horse", "Vaishya", Adi, &["swift", "healing", "pioneering"]),
    record(Nakshatra::Bharani, "Bharani", Planet::Venus, "Yama", "Yoni",
        "Ugra", Manushya, "Elephant", "Mleccha", Madhya, &["restraint", "endurance", "transformation"]),
    record(Nakshatra::Krittika, "Krittika", Planet::Sun, "Agni", "Razor",
        "Mishra", Rakshasa, "Sheep", "Brahmin", Antya, &["sharp", "purifying", "determined"]),
    record(Nakshatra::Rohini, "Rohini", Planet::Moon, "Brahma", "Chariot",
        "Dhruva", Manushya, "Serpent", "Shudra", Antya, &["fertile", "charming", "stable"]),
    record(Nakshatra::Mrigashira, "Mrigashira", Planet::Mars, "Soma", "Deer's head",
        "Mridu", Deva, "Serpent", "Farmer", Madhya, &["searching", "gentle", "curious"]),
    record(Nakshatra::Ardra, "Ardra", Planet::Rahu, "Rudra", "Teardrop",
        "Tikshna", Manushya, "Dog", "Butcher", Adi, &["stormy", "intense", "renewing"]),
    record(Nakshatra::Punarvasu, "Punarvasu", Planet::Jupiter, "Aditi", "Quiver of arrows",
        "Chara", Deva, "Cat", "Vaishya", Adi, &["restorative", "generous", "optimistic"]),
    record(Nakshatra::Pushya, "Pushya", Planet::Saturn, "Brihaspati", "Cow's udder",
        "Kshipra", Deva, "Sheep", "Kshatriya", Madhya, &["nourishing", "devoted", "protective"]),
    record(Nakshatra::Ashlesha, "Ashlesha", Planet::Mercury, "Nagas", "Coiled serpent",
        "Tikshna", Rakshasa, "Cat", "Mleccha", Antya, &["hypnotic", "shrewd", "secretive"]),
    record(Nakshatra::Magha, "Magha", Planet::Ketu, "Pitris", "Royal throne",
        "Ugra", Rakshasa, "Rat", "Shudra", Antya, &["regal", "ancestral", "proud"]),
    record(Nakshatra::PurvaPhalguni, "Purva Phalguni", Planet::Venus, "Bhaga", "Front legs of a bed",
        "Ugra", Manushya, "Rat", "Brahmin", Madhya, &["pleasure-seeking", "creative", "affectionate"]),
    record(Nakshatra::UttaraPhalguni, "Uttara Phalguni", Planet::Sun, "Aryaman", "Back legs of a bed",
        "Dhruva", Manushya, "Cow", "Kshatriya", Adi, &["loyal", "helpful", "contractual"]),
    record(Nakshatra::Hasta, "Hasta", Planet::Moon, "Savitr", "Hand",
        "Kshipra", Deva, "Buffalo", "Vaishya", Adi, &["skilful", "resourceful", "witty"]),
    record(Nakshatra::Chitra, "Chitra", Planet::Mars, "Vishvakarma", "Bright jewel",
        "Mridu", Rakshasa, "Tiger", "Farmer", Madhya, &["artistic", "brilliant", "constructive"]),
    record(Nakshatra::Swati, "Swati", Planet::Rahu, "Vayu", "Young sprout",
        "Chara", Deva, "Buffalo", "Butcher", Antya, &["independent", "adaptable", "diplomatic"]),
    record(Nakshatra::Vishakha, "Vishakha", Planet::Jupiter, "Indragni", "Triumphal arch",
        "Mishra", Rakshasa, "Tiger", "Mleccha", Antya, &["ambitious", "goal-driven", "persistent"]),
    record(Nakshatra::Anuradha, "Anuradha", Planet::Saturn, "Mitra", "Lotus",
        "Mridu", Deva, "Deer", "Shudra", Madhya, &["friendly", "devoted", "organised"]),
    record(Nakshatra::Jyeshtha, "Jyeshtha", Planet::Mercury, "Indra", "Earring",
        "Tikshna", Rakshasa, "Deer", "Farmer", Adi, &["senior", "protective", "authoritative"]),
    record(Nakshatra::Mula, "Mula", Planet::Ketu, "Nirriti", "Bunch of roots",
        "Tikshna", Rakshasa, "Dog", "Butcher", Adi, &["investigative", "uprooting", "philosophical"]),
    record(Nakshatra::PurvaAshadha, "Purva Ashadha", Planet::Venus, "Apas", "Elephant tusk",
        "Ugra", Manushya, "Monkey", "Brahmin", Madhya, &["invincible", "persuasive", "purifying"]),
    record(Nakshatra::UttaraAshadha, "Uttara Ashadha", Planet::Sun, "Vishvedevas", "Planks of a bed",
        "Dhruva", Manushya, "Mongoose", "Kshatriya", Antya, &["enduring", "righteous", "victorious"]),
    record(Nakshatra::Shravana, "Shravana", Planet::Moon, "Vishnu", "Ear",
        "Chara", Deva, "Monkey", "Mleccha", Antya, &["listening", "learned", "connective"]),
    record(Nakshatra::Dhanishtha, "Dhanishtha", Planet::Mars, "Vasus", "Drum",
        "Chara", Rakshasa, "Lion", "Farmer", Madhya, &["wealthy", "musical", "generous"]),
    record(Nakshatra::Shatabhisha, "Shatabhisha", Planet::Rahu, "Varuna", "Empty circle",
        "Chara", Rakshasa, "Horse", "Butcher", Adi, &["healing", "reclusive", "mystical"]),
    record(Nakshatra::PurvaBhadrapada, "Purva Bhadrapada", Planet::Jupiter, "Aja Ekapada", "Swords",
        "Ugra", Manushya, "Lion", "Brahmin", Adi, &["fiery", "idealistic", "austere"]),
    record(Nakshatra::UttaraBhadrapada, "Uttara Bhadrapada", Planet::Saturn, "Ahir Budhnya", "Twins",
        "Dhruva", Manushya, "Cow", "Kshatriya", Madhya, &["deep", "disciplined", "compassionate"]),
    record(Nakshatra::Revati, "Revati", Planet::Mercury, "Pushan", "Fish",
        "Mridu", Deva, "Elephant", "Shudra", Antya, &["nurturing", "guiding", "prosperous"]),
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub fn name(self) -> &'static str {
        NAKSHATRA_TABLE[self as usize].name
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Full reference record.
    pub fn record(self) -> &'static NakshatraRecord {
        &NAKSHATRA_TABLE[self as usize]
    }

    /// Ruling planet (Vimshottari dasha lord).
    pub fn ruler(self) -> Planet {
        NAKSHATRA_TABLE[self as usize].ruler
    }
}

/// A resolved nakshatra position: static record plus pada and offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraInfo {
    #[serde(flatten)]
    pub record: &'static NakshatraRecord,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degree: f64,
}

impl NakshatraInfo {
    pub fn nakshatra(&self) -> Nakshatra {
        self.record.nakshatra
    }

    /// 0-based nakshatra index.
    pub fn index(&self) -> u8 {
        self.record.nakshatra.index()
    }

    /// Fraction of the nakshatra already traversed, in [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        self.degree / NAKSHATRA_SPAN_27
    }
}

/// 0-based nakshatra index of a sidereal longitude, clamped to [0, 26].
pub fn nakshatra_index(sidereal_lon_deg: f64) -> u8 {
    split_span(normalize_360(sidereal_lon_deg), NAKSHATRA_SPAN_27, 27).0
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Each nakshatra spans 13 deg 20' (13.3333... deg). Each pada spans 3 deg 20'.
pub fn resolve_nakshatra(sidereal_lon_deg: f64) -> NakshatraInfo {
    let (nak_idx, degree) = split_span(normalize_360(sidereal_lon_deg), NAKSHATRA_SPAN_27, 27);
    let (pada_idx, _) = split_span(degree, PADA_SPAN, 4);

    NakshatraInfo {
        record: &NAKSHATRA_TABLE[nak_idx as usize],
        pada: pada_idx + 1,
        degree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_numbers_sequential() {
        for (i, r) in NAKSHATRA_TABLE.iter().enumerate() {
            assert_eq!(r.number as usize, i + 1);
            assert_eq!(r.nakshatra.index() as usize, i);
        }
    }

    #[test]
    fn ruler_cycle_repeats_every_nine() {
        for i in 0..9 {
            let r = NAKSHATRA_TABLE[i].ruler;
            assert_eq!(NAKSHATRA_TABLE[i + 9].ruler, r, "index {}", i + 9);
            assert_eq!(NAKSHATRA_TABLE[i + 18].ruler, r, "index {}", i + 18);
        }
    }

    #[test]
    fn gotra_cycle() {
        assert_eq!(Nakshatra::Ashwini.record().gotra, "Marichi");
        assert_eq!(Nakshatra::Pushya.record().gotra, "Marichi");
        assert_eq!(Nakshatra::Revati.record().gotra, "Pulaha");
    }

    #[test]
    fn nadi_is_balanced() {
        let count = |n: Nadi| NAKSHATRA_TABLE.iter().filter(|r| r.nadi == n).count();
        assert_eq!(count(Nadi::Adi), 9);
        assert_eq!(count(Nadi::Madhya), 9);
        assert_eq!(count(Nadi::Antya), 9);
    }

    #[test]
    fn gana_is_balanced() {
        let count = |g: Gana| NAKSHATRA_TABLE.iter().filter(|r| r.gana == g).count();
        assert_eq!(count(Gana::Deva), 9);
        assert_eq!(count(Gana::Manushya), 9);
        assert_eq!(count(Gana::Rakshasa), 9);
    }

    #[test]
    fn characteristics_present() {
        for r in NAKSHATRA_TABLE.iter() {
            assert!(!r.characteristics.is_empty(), "{}", r.name);
        }
    }

    #[test]
    fn boundary_0() {
        let info = resolve_nakshatra(0.0);
        assert_eq!(info.nakshatra(), Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert!(info.degree.abs() < 1e-10);
    }

    #[test]
    fn moon_at_101_5_is_pushya_pada_3() {
        let info = resolve_nakshatra(101.5);
        assert_eq!(info.nakshatra(), Nakshatra::Pushya);
        assert_eq!(info.index(), 7);
        assert!((info.degree - 8.166_666_666).abs() < 1e-6);
        assert_eq!(info.pada, 3);
    }

    #[test]
    fn pada_boundaries() {
        for p in 0..4u8 {
            let lon = p as f64 * PADA_SPAN + 0.01;
            assert_eq!(resolve_nakshatra(lon).pada, p + 1);
        }
    }

    #[test]
    fn last_nakshatra() {
        let info = resolve_nakshatra(359.99);
        assert_eq!(info.nakshatra(), Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn elapsed_fraction_midpoint() {
        let info = resolve_nakshatra(NAKSHATRA_SPAN_27 / 2.0);
        assert!((info.elapsed_fraction() - 0.5).abs() < 1e-12);
    }
}
