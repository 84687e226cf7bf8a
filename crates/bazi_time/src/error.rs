//! Error types for civil date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The component of a date or time that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl DateField {
    /// Lower-case field name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

impl Display for DateField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from civil date construction or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A field does not describe a real calendar date or clock time.
    InvalidDateTime { field: DateField, value: i64 },
    /// Text could not be parsed as a date or date-time.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTime { field, value } => {
                write!(f, "invalid date/time: {field} = {value}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field() {
        let e = TimeError::InvalidDateTime {
            field: DateField::Day,
            value: 30,
        };
        assert_eq!(e.to_string(), "invalid date/time: day = 30");
    }
}
