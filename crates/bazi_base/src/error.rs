//! Error types for calendar conversion and pillar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_time::{DateField, TimeError};

/// Errors from lunar conversion, pillar derivation, or cycle arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Invalid civil date/time or unparsable input.
    Time(TimeError),
    /// Year outside the lunar table coverage (1900-2100).
    DateOutOfRange { year: i32 },
    /// Lunar month/day that does not exist in the given lunar year.
    InvalidLunarDate { field: DateField, value: i64 },
    /// Stem/branch pair that never occurs in the 60-cycle (parities differ).
    InvalidCombination { stem: u8, branch: u8 },
    /// Index outside its cyclic domain.
    InvalidIndex { what: &'static str, value: i64 },
    /// Chart option outside its accepted bounds.
    InvalidConfig { field: &'static str, value: i64 },
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::DateOutOfRange { year } => {
                write!(f, "year {year} outside supported range 1900-2100")
            }
            Self::InvalidLunarDate { field, value } => {
                write!(f, "invalid lunar date: {field} = {value}")
            }
            Self::InvalidCombination { stem, branch } => {
                write!(f, "stem {stem} and branch {branch} never pair in the 60-cycle")
            }
            Self::InvalidIndex { what, value } => write!(f, "invalid {what} index: {value}"),
            Self::InvalidConfig { field, value } => write!(f, "invalid {field}: {value}"),
        }
    }
}

impl Error for BaziError {}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
