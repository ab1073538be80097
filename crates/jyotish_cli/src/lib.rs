//! Command implementations behind the `jyotish` binary.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use jyotish_base::{
    AyanamshaModel, AyanamshaSystem, VedicError, degrees_in_rashi, resolve_nakshatra,
    resolve_rashi,
};
use jyotish_engine::{
    ObserverLocation, TropicalPosition, VedicCalculationResult, VedicConfig,
    calculate_vedic_astrology, calculate_with_transits, resolve_positions,
};
use jyotish_time::UtcTime;

/// Errors surfaced by CLI commands.
#[derive(Debug)]
#[non_exhaustive]
pub enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Vedic(VedicError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "invalid JSON in {}: {source}", path.display()),
            Self::Vedic(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Vedic(e) => Some(e),
        }
    }
}

impl From<VedicError> for CliError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

/// Contents of a `--input` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub date: UtcTime,
    pub location: ObserverLocation,
    pub positions: Vec<TropicalPosition>,
    #[serde(default)]
    pub config: VedicConfig,
}

/// Contents of a `--previous` file: an earlier snapshot to diff against.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub date: UtcTime,
    pub positions: Vec<TropicalPosition>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_input(path: &Path) -> Result<ChartInput, CliError> {
    read_json(path)
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, CliError> {
    read_json(path)
}

/// Compute a chart, with transits when a previous snapshot is given.
///
/// `system` overrides the ayanamsha from the input file's config.
pub fn run_chart(
    input: &ChartInput,
    previous: Option<&Snapshot>,
    system: Option<AyanamshaSystem>,
) -> Result<VedicCalculationResult, CliError> {
    let mut config = input.config;
    if let Some(sys) = system {
        config.ayanamsha = AyanamshaModel::from_system(sys);
    }
    debug!(system = ?system, "chart config resolved");

    let result = match previous {
        Some(prev) => {
            let earlier = resolve_positions(&prev.positions, &prev.date, &config)?;
            calculate_with_transits(
                &input.positions,
                &input.date,
                &input.location,
                &config,
                &earlier,
            )?
        }
        None => calculate_vedic_astrology(&input.positions, &input.date, &input.location, &config)?,
    };
    Ok(result)
}

/// One-line rashi summary for a sidereal longitude.
pub fn rashi_line(lon: f64) -> String {
    let r = resolve_rashi(lon);
    format!(
        "{} ({}) - {:.4} deg in rashi, lord {}",
        r.name,
        r.western_name,
        degrees_in_rashi(lon),
        r.ruler
    )
}

/// One-line nakshatra summary for a sidereal longitude.
pub fn nakshatra_line(lon: f64) -> String {
    let info = resolve_nakshatra(lon);
    format!(
        "{} (number {}) - Pada {} ({:.4} deg in nakshatra), ruler {}",
        info.record.name, info.record.number, info.pada, info.degree, info.record.ruler
    )
}

pub fn ayanamsa_line(date: &UtcTime, system: AyanamshaSystem) -> String {
    let deg = AyanamshaModel::from_system(system).ayanamsa(date);
    format!("{} ayanamsha at {date}: {deg:.6} deg", system.name())
}
