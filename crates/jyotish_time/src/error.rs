//! Error types for calendar parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating calendar instants.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text did not match `YYYY-MM-DDThh:mm:ssZ` or `YYYY-MM-DD`.
    Parse(String),
    /// A calendar field is outside its valid range.
    FieldOutOfRange(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "time parse error: {msg}"),
            Self::FieldOutOfRange(field) => write!(f, "calendar field out of range: {field}"),
        }
    }
}

impl Error for TimeError {}
