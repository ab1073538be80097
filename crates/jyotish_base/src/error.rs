//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_time::TimeError;

use crate::planet::Planet;

/// Errors from Vedic calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// A required numeric field is NaN or infinite.
    InvalidInput {
        /// Planet the field belongs to; `None` for observer fields.
        planet: Option<Planet>,
        field: &'static str,
        value: f64,
    },
    /// Calendar fields of the reference instant are out of range.
    Time(TimeError),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput {
                planet: Some(p),
                field,
                value,
            } => write!(f, "invalid input: {p} {field} is {value}"),
            Self::InvalidInput {
                planet: None,
                field,
                value,
            } => write!(f, "invalid input: {field} is {value}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for VedicError {}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Reject NaN and ±∞ for a required numeric field.
pub fn ensure_finite(
    planet: Option<Planet>,
    field: &'static str,
    value: f64,
) -> Result<f64, VedicError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VedicError::InvalidInput {
            planet,
            field,
            value,
        })
    }
}
