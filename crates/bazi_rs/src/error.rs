//! Error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::BaziError;
use bazi_time::TimeError;

/// Errors from the convenience functions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ApiError {
    /// Error from the calendar or pillar core.
    Core(BaziError),
    /// Text that is not a stem, a branch, or a stem+branch pillar.
    UnknownSymbol(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core(e) => write!(f, "{e}"),
            Self::UnknownSymbol(s) => write!(f, "unknown stem/branch symbol: '{s}'"),
        }
    }
}

impl Error for ApiError {}

impl From<BaziError> for ApiError {
    fn from(e: BaziError) -> Self {
        Self::Core(e)
    }
}

impl From<TimeError> for ApiError {
    fn from(e: TimeError) -> Self {
        Self::Core(BaziError::Time(e))
    }
}
