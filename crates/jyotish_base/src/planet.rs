//! Planet identities accepted from the ephemeris provider.
//!
//! The nine Vedic grahas (Sun through Ketu) drive every calculation.
//! The outer planets and Earth may appear in provider output; they are
//! resolved like any other body, but Earth never takes part in aspects.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// A body reported by the ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
    Earth,
}

/// All 13 recognised bodies in index order.
pub const ALL_PLANETS: [Planet; 13] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
    Planet::Earth,
];

/// The 9 Vedic grahas in traditional order.
pub const GRAHAS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

impl Planet {
    /// English name, also the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Earth => "Earth",
        }
    }

    /// Sanskrit name of the graha. Bodies without one keep their English name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Buddh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Earth => "Bhumi",
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One of the nine Vedic grahas.
    pub const fn is_graha(self) -> bool {
        (self as u8) < 9
    }

    /// Mean time the body spends in one 30° sign, in days.
    ///
    /// Earth's heliocentric motion mirrors the Sun's.
    pub const fn mean_sign_residence_days(self) -> f64 {
        match self {
            Self::Sun | Self::Earth => 30.44,
            Self::Moon => 2.28,
            Self::Mars => 57.2,
            Self::Mercury => 30.44,
            Self::Venus => 30.44,
            Self::Jupiter => 361.0,
            Self::Saturn => 896.0,
            Self::Rahu | Self::Ketu => 565.0,
            Self::Uranus => 2_557.0,
            Self::Neptune => 5_016.0,
            Self::Pluto => 7_540.0,
        }
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised planet name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlanet(pub String);

impl Display for UnknownPlanet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown planet name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPlanet {}

impl FromStr for Planet {
    type Err = UnknownPlanet;

    /// Case-insensitive English or Sanskrit name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => Ok(Self::Sun),
            "moon" | "chandra" => Ok(Self::Moon),
            "mars" | "mangal" => Ok(Self::Mars),
            "mercury" | "buddh" | "budha" => Ok(Self::Mercury),
            "jupiter" | "guru" => Ok(Self::Jupiter),
            "venus" | "shukra" => Ok(Self::Venus),
            "saturn" | "shani" => Ok(Self::Saturn),
            "rahu" | "north node" | "true node" => Ok(Self::Rahu),
            "ketu" | "south node" => Ok(Self::Ketu),
            "uranus" => Ok(Self::Uranus),
            "neptune" => Ok(Self::Neptune),
            "pluto" => Ok(Self::Pluto),
            "earth" | "bhumi" => Ok(Self::Earth),
            _ => Err(UnknownPlanet(s.to_string())),
        }
    }
}

impl Serialize for Planet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Planet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
